//! Command rules: read/write, while, if/then/else, assignment and
//! procedure calls.

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    decl::parse_var_list,
    expr::{parse_condition, parse_expression},
    parser::Parser,
};

/// Commands ::= Command (';' Commands)?
pub(crate) fn parse_commands(parser: &mut Parser) -> Result<(), Error> {
    parse_command(parser)?;
    if parser.accept(TokenKind::Semicolon) {
        parse_commands(parser)?;
    }
    Ok(())
}

/// Command ::= 'read' '(' VarList ')'
///           | 'write' '(' VarList ')'
///           | 'while' Condition 'do' Commands '$'
///           | 'if' Condition 'then' Commands ElsePart '$'
///           | Identifier RestIdent
fn parse_command(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_kind() {
        Some(TokenKind::Read) | Some(TokenKind::Write) => parse_io_command(parser),
        Some(TokenKind::While) => parse_while_command(parser),
        Some(TokenKind::If) => parse_if_command(parser),
        Some(TokenKind::Identifier) => parse_ident_command(parser),
        _ => Err(parser.unexpected(&[
            TokenKind::Read,
            TokenKind::Write,
            TokenKind::While,
            TokenKind::If,
            TokenKind::Identifier,
        ])),
    }
}

/// Both io commands share their shape; every listed variable must have
/// been declared.
fn parse_io_command(parser: &mut Parser) -> Result<(), Error> {
    if !parser.accept(TokenKind::Read) {
        parser.expect(TokenKind::Write)?;
    }
    parser.expect(TokenKind::OpenParen)?;
    parse_var_list(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.check_pending_declared()
}

fn parse_while_command(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::While)?;
    parse_condition(parser)?;
    parser.expect(TokenKind::Do)?;
    parse_commands(parser)?;
    parser.expect(TokenKind::Dollar)?;
    Ok(())
}

fn parse_if_command(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::If)?;
    parse_condition(parser)?;
    parser.expect(TokenKind::Then)?;
    parse_commands(parser)?;
    parse_else_part(parser)?;
    parser.expect(TokenKind::Dollar)?;
    Ok(())
}

/// ElsePart ::= 'else' Commands | ε
fn parse_else_part(parser: &mut Parser) -> Result<(), Error> {
    if parser.accept(TokenKind::Else) {
        parse_commands(parser)?;
    }
    Ok(())
}

/// RestIdent ::= ':=' Expression | ArgList
///
/// An assignment target must be declared and joins the operand list, so
/// the expression's compatibility check covers it too. A bare identifier
/// or one followed by arguments is a procedure call.
fn parse_ident_command(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    let name = token.text.clone();
    let position = token.position();

    if parser.accept(TokenKind::Assign) {
        parser.check_declared(&name, position)?;
        parser.push_pending(name, position);
        parse_expression(parser)
    } else {
        parse_arg_list(parser)
    }
}

/// ArgList ::= '(' Identifier (';' Identifier)* ')' | ε
fn parse_arg_list(parser: &mut Parser) -> Result<(), Error> {
    if parser.accept(TokenKind::OpenParen) {
        parser.expect(TokenKind::Identifier)?;
        while parser.accept(TokenKind::Semicolon) {
            parser.expect(TokenKind::Identifier)?;
        }
        parser.expect(TokenKind::CloseParen)?;
    }
    Ok(())
}
