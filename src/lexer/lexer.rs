use crate::{
    errors::errors::{Error, ErrorImpl},
    source_context, Position,
};

use super::tokens::{Token, TokenKind, PATTERNS};

pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    line: u32,
    line_start: usize,
    program_ended: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
            pos: 0,
            line: 1,
            line_start: 0,
            program_ended: false,
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: (self.pos - self.line_start) as u32,
        }
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.position())
            .with_context(source_context(self.source, self.line))
    }

    fn current_line_text(&self) -> String {
        self.source
            .lines()
            .nth((self.line - 1) as usize)
            .unwrap_or("")
            .to_string()
    }

    /// Maximal munch: every pattern is tried at the current offset, the
    /// longest match wins and ties go to the kind declared first.
    fn best_match(&self) -> (TokenKind, usize) {
        let remainder = self.remainder();
        let mut best = (TokenKind::Mismatch, 0);

        for (kind, regex) in PATTERNS.iter() {
            if let Some(found) = regex.find(remainder) {
                if found.end() > best.1 {
                    best = (*kind, found.end());
                }
            }
        }

        best
    }

    fn push(&mut self, kind: TokenKind, text: &str) -> Result<(), Error> {
        if self.program_ended {
            return Err(self.error(ErrorImpl::TokenAfterProgramEnd {
                token: text.to_string(),
            }));
        }

        let position = self.position();
        self.tokens.push(Token {
            kind,
            text: text.to_string(),
            line: position.line,
            column: position.column,
        });

        let count = self.tokens.len();
        if kind == TokenKind::Dot && count >= 2 && self.tokens[count - 2].kind == TokenKind::End {
            self.program_ended = true;
        }

        Ok(())
    }

    /// Comments may span lines; the running line count and column origin
    /// must stay honest for whatever follows them.
    fn track_embedded_newlines(&mut self, text: &str) {
        let newlines = text.matches('\n').count();
        if newlines > 0 {
            self.line += newlines as u32;
            if let Some(last) = text.rfind('\n') {
                self.line_start = self.pos + last + 1;
            }
        }
    }
}

/// Converts source text into an ordered token sequence.
///
/// Whitespace, newlines and comments are consumed without producing
/// tokens. A character no pattern accepts fails the whole scan, as does
/// any token written after the closing `end.` of the program.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);

    while !lexer.at_eof() {
        let (kind, length) = lexer.best_match();
        let text = &lexer.remainder()[..length];

        match kind {
            TokenKind::Newline => {
                lexer.line += 1;
                lexer.line_start = lexer.pos + length;
            }
            TokenKind::Whitespace => {}
            TokenKind::Comment => lexer.track_embedded_newlines(text),
            TokenKind::Mismatch => {
                return Err(lexer.error(ErrorImpl::UnscannableCharacter {
                    character: text.to_string(),
                    line_text: lexer.current_line_text(),
                }));
            }
            _ => lexer.push(kind, text)?,
        }

        lexer.pos += length;
    }

    Ok(lexer.tokens)
}
