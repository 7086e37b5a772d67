//! Declaration-section rules: variable groups, procedures, parameters
//! and the local declarations of a procedure body.
//!
//! `Declarations` and `LocalDecls` are the two speculative points of the
//! grammar: each attempts its production and, on a structural failure,
//! is treated as empty after rolling back cursor and semantic state.

use crate::{errors::errors::Error, lexer::tokens::TokenKind, symbols::symbol_table::VarType};

use super::{parser::Parser, stmt::parse_commands};

/// Declarations ::= VarDecl MoreDecls | ProcDecl MoreDecls | ε
pub(crate) fn parse_declarations(parser: &mut Parser) -> Result<(), Error> {
    parser.speculate(parse_declaration_group)
}

fn parse_declaration_group(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_kind() {
        Some(TokenKind::Var) => parse_var_decl(parser)?,
        Some(TokenKind::Procedure) => parse_proc_decl(parser)?,
        _ => return Err(parser.unexpected(&[TokenKind::Var, TokenKind::Procedure])),
    }
    parse_more_decls(parser)
}

/// MoreDecls ::= ';' Declarations | ε
fn parse_more_decls(parser: &mut Parser) -> Result<(), Error> {
    if parser.accept(TokenKind::Semicolon) {
        parse_declarations(parser)?;
    }
    Ok(())
}

/// VarDecl ::= 'var' VarList ':' TypeName
fn parse_var_decl(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Var)?;
    parse_var_list(parser)?;
    parser.expect(TokenKind::Colon)?;
    parse_type_name(parser)
}

/// VarList ::= Identifier (',' VarList)?
///
/// Collects each name into the pending list; whoever invoked the list
/// decides whether the names are being declared or referenced.
pub(crate) fn parse_var_list(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    let name = token.text.clone();
    let position = token.position();
    parser.push_pending(name, position);

    if parser.accept(TokenKind::Comma) {
        parse_var_list(parser)?;
    }
    Ok(())
}

/// TypeName ::= 'integer' | 'real'
///
/// Completing the rule registers every pending name under the type.
fn parse_type_name(parser: &mut Parser) -> Result<(), Error> {
    if parser.accept(TokenKind::Integer) {
        parser.register_pending(VarType::Integer)
    } else if parser.accept(TokenKind::Real) {
        parser.register_pending(VarType::Real)
    } else {
        Err(parser.unexpected(&[TokenKind::Integer, TokenKind::Real]))
    }
}

/// ProcDecl ::= 'procedure' Identifier Params ProcBody
fn parse_proc_decl(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Procedure)?;
    parser.expect(TokenKind::Identifier)?;
    parse_params(parser)?;
    parse_proc_body(parser)
}

/// Params ::= '(' ParamList ')' | ε
fn parse_params(parser: &mut Parser) -> Result<(), Error> {
    if parser.accept(TokenKind::OpenParen) {
        parse_param_list(parser)?;
        parser.expect(TokenKind::CloseParen)?;
    }
    Ok(())
}

/// ParamList ::= VarList ':' TypeName (';' ParamList)?
///
/// Parameters land in the same flat symbol table as every other
/// declaration, so a parameter shadowing an outer name is a duplicate.
fn parse_param_list(parser: &mut Parser) -> Result<(), Error> {
    parse_var_list(parser)?;
    parser.expect(TokenKind::Colon)?;
    parse_type_name(parser)?;

    if parser.accept(TokenKind::Semicolon) {
        parse_param_list(parser)?;
    }
    Ok(())
}

/// ProcBody ::= LocalDecls 'begin' Commands 'end'
fn parse_proc_body(parser: &mut Parser) -> Result<(), Error> {
    parse_local_decls(parser)?;
    parser.expect(TokenKind::Begin)?;
    parse_commands(parser)?;
    parser.expect(TokenKind::End)?;
    Ok(())
}

/// LocalDecls ::= VarDecl (';' LocalDecls)? | ε
fn parse_local_decls(parser: &mut Parser) -> Result<(), Error> {
    parser.speculate(parse_local_decl_group)
}

fn parse_local_decl_group(parser: &mut Parser) -> Result<(), Error> {
    parse_var_decl(parser)?;
    if parser.accept(TokenKind::Semicolon) {
        parse_local_decls(parser)?;
    }
    Ok(())
}
