//! Parser state and the entry points of the analysis.
//!
//! The parser owns a forward-only cursor over the token stream plus the
//! semantic state built up alongside grammar matching: the symbol table of
//! declared variables and the transient list of identifiers collected
//! while a declaration group or an expression is being parsed.

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::tokens::{Token, TokenKind},
    source_context,
    symbols::symbol_table::{SymbolTable, VarType},
    Position,
};

use super::decl::parse_declarations;
use super::stmt::parse_commands;

pub struct Parser<'a> {
    /// The token stream received from the lexer
    tokens: &'a [Token],
    /// Cursor into the token stream; advances strictly forward
    pos: usize,
    /// Original source text, kept only for richer diagnostics
    source: Option<&'a str>,
    /// Declared variables and their types
    symbol_table: SymbolTable,
    /// Identifiers collected while a declaration group or expression is
    /// in flight; consumed by exactly one semantic action
    pending: Vec<(String, Position)>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], source: Option<&'a str>) -> Self {
        Parser {
            tokens,
            pos: 0,
            source,
            symbol_table: SymbolTable::new(),
            pending: vec![],
        }
    }

    pub fn parse(mut self) -> Result<(), Error> {
        parse_program(&mut self)
    }

    // -------------------------
    // Cursor helpers
    // -------------------------

    pub(crate) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    /// True when the current token has the given kind.
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consumes the current token unconditionally.
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consumes the current token when it has the given kind.
    pub(crate) fn accept(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Consumes and returns the current token, or fails with the expected
    /// kind in the diagnostic.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<&Token, Error> {
        if !self.at(kind) {
            return Err(self.unexpected(&[kind]));
        }
        self.pos += 1;
        Ok(&self.tokens[self.pos - 1])
    }

    fn error_position(&self) -> Position {
        if let Some(token) = self.current() {
            return token.position();
        }
        match self.tokens.last() {
            Some(last) => Position {
                line: last.line,
                column: last.column + last.text.len() as u32,
            },
            None => Position { line: 1, column: 0 },
        }
    }

    /// Builds an error, quoting the surrounding source lines when the
    /// original text was handed to the parser.
    pub(crate) fn error(&self, error_impl: ErrorImpl, position: Position) -> Error {
        let error = Error::new(error_impl, position);
        match self.source {
            Some(source) => error.with_context(source_context(source, position.line)),
            None => error,
        }
    }

    pub(crate) fn unexpected(&self, expected: &[TokenKind]) -> Error {
        let expected = expected
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        let found = match self.current() {
            Some(token) => token.kind.to_string(),
            None => String::from("end of input"),
        };

        self.error(
            ErrorImpl::UnexpectedToken { expected, found },
            self.error_position(),
        )
    }

    // -------------------------
    // Speculation
    // -------------------------

    /// Runs `attempt`, and on a parse failure restores the cursor and the
    /// semantic state and substitutes the empty production. Semantic
    /// errors are never swallowed here: a partially populated symbol
    /// table must not be discarded silently.
    pub(crate) fn speculate(
        &mut self,
        attempt: fn(&mut Parser) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let pos = self.pos;
        let symbol_table = self.symbol_table.clone();
        let pending = self.pending.clone();

        match attempt(self) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::Parse => {
                self.pos = pos;
                self.symbol_table = symbol_table;
                self.pending = pending;
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    // -------------------------
    // Semantic actions
    // -------------------------

    pub(crate) fn push_pending(&mut self, name: String, position: Position) {
        self.pending.push((name, position));
    }

    /// Registers every collected name under `var_type`, failing on a name
    /// that is already in the table. Consumes the pending list.
    pub(crate) fn register_pending(&mut self, var_type: VarType) -> Result<(), Error> {
        for (name, position) in std::mem::take(&mut self.pending) {
            if self.symbol_table.lookup(&name).is_some() {
                return Err(self.error(ErrorImpl::DuplicateDeclaration { variable: name }, position));
            }
            self.symbol_table.insert(&name, var_type);
        }
        Ok(())
    }

    /// Fails unless every collected name was previously declared.
    /// Consumes the pending list.
    pub(crate) fn check_pending_declared(&mut self) -> Result<(), Error> {
        for (name, position) in std::mem::take(&mut self.pending) {
            if self.symbol_table.lookup(&name).is_none() {
                return Err(self.error(ErrorImpl::UndeclaredVariable { variable: name }, position));
            }
        }
        Ok(())
    }

    pub(crate) fn check_declared(&self, name: &str, position: Position) -> Result<(), Error> {
        if self.symbol_table.lookup(name).is_none() {
            return Err(self.error(
                ErrorImpl::UndeclaredVariable {
                    variable: name.to_string(),
                },
                position,
            ));
        }
        Ok(())
    }

    /// Fired when an expression completes: every operand collected for it
    /// must share the declared type of the first one. The check itself
    /// only fires on two or more operands, but the list is always
    /// consumed so the next expression starts from a clean slate.
    pub(crate) fn check_pending_compatible(&mut self) -> Result<(), Error> {
        if self.pending.len() <= 1 {
            self.pending.clear();
            return Ok(());
        }

        let (first, first_position) = self.pending[0].clone();
        let expected = match self.symbol_table.lookup(&first) {
            Some(var_type) => var_type,
            None => {
                self.pending.clear();
                return Ok(());
            }
        };

        let compatible = self
            .pending
            .iter()
            .all(|(name, _)| self.symbol_table.lookup(name) == Some(expected));
        if !compatible {
            let variables = self.pending.iter().map(|(name, _)| name.clone()).collect();
            return Err(self.error(
                ErrorImpl::IncompatibleTypes {
                    variables,
                    expected: expected.to_string(),
                },
                first_position,
            ));
        }

        self.pending.clear();
        Ok(())
    }
}

/// Validates a token stream against the grammar.
///
/// `source` is only used to enrich diagnostics; passing `None` keeps the
/// expected/found/position part of every error and drops the quoted
/// context block.
pub fn parse(tokens: &[Token], source: Option<&str>) -> Result<(), Error> {
    Parser::new(tokens, source).parse()
}

/// Program ::= 'program' Identifier Body '.'
fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Program)?;
    parser.expect(TokenKind::Identifier)?;
    parse_body(parser)?;
    parser.expect(TokenKind::Dot)?;
    Ok(())
}

/// Body ::= Declarations 'begin' Commands 'end'
fn parse_body(parser: &mut Parser) -> Result<(), Error> {
    parse_declarations(parser)?;
    parser.expect(TokenKind::Begin)?;
    parse_commands(parser)?;
    parser.expect(TokenKind::End)?;
    Ok(())
}
