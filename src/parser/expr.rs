//! Expression and condition rules.
//!
//! Identifier operands are checked against the symbol table as they are
//! consumed and collected for the compatibility check fired when the
//! enclosing expression completes.

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Condition ::= Expression Relation Expression
pub(crate) fn parse_condition(parser: &mut Parser) -> Result<(), Error> {
    parse_expression(parser)?;
    parse_relation(parser)?;
    parse_expression(parser)
}

/// Relation ::= '=' | '<>' | '>=' | '<=' | '>' | '<'
fn parse_relation(parser: &mut Parser) -> Result<(), Error> {
    let relations = [
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::GreaterEquals,
        TokenKind::LessEquals,
        TokenKind::Greater,
        TokenKind::Less,
    ];

    for relation in relations {
        if parser.accept(relation) {
            return Ok(());
        }
    }
    Err(parser.unexpected(&relations))
}

/// Expression ::= Term MoreTerms
pub(crate) fn parse_expression(parser: &mut Parser) -> Result<(), Error> {
    parse_term(parser)?;
    parse_more_terms(parser)?;

    parser.check_pending_compatible()
}

/// MoreTerms ::= ('+' | '-') Term MoreTerms | ε
fn parse_more_terms(parser: &mut Parser) -> Result<(), Error> {
    if parser.accept(TokenKind::Plus) || parser.accept(TokenKind::Dash) {
        parse_term(parser)?;
        parse_more_terms(parser)?;
    }
    Ok(())
}

/// Term ::= UnaryOp Factor MoreFactors, where UnaryOp is an optional
/// leading sign.
fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    if !parser.accept(TokenKind::Plus) {
        parser.accept(TokenKind::Dash);
    }
    parse_factor(parser)?;
    parse_more_factors(parser)
}

/// MoreFactors ::= ('*' | '/') Factor MoreFactors | ε
fn parse_more_factors(parser: &mut Parser) -> Result<(), Error> {
    if parser.accept(TokenKind::Star) || parser.accept(TokenKind::Slash) {
        parse_factor(parser)?;
        parse_more_factors(parser)?;
    }
    Ok(())
}

/// Factor ::= Identifier | IntLiteral | FloatLiteral | '(' Expression ')'
fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_kind() {
        Some(TokenKind::Identifier) => {
            let token = parser.expect(TokenKind::Identifier)?;
            let name = token.text.clone();
            let position = token.position();
            parser.check_declared(&name, position)?;
            parser.push_pending(name, position);
            Ok(())
        }
        Some(TokenKind::Int) | Some(TokenKind::Float) => {
            parser.advance();
            Ok(())
        }
        Some(TokenKind::OpenParen) => {
            parser.expect(TokenKind::OpenParen)?;
            parse_expression(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(())
        }
        _ => Err(parser.unexpected(&[
            TokenKind::Identifier,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::OpenParen,
        ])),
    }
}
