//! Unit tests for the parser module.
//!
//! This module covers grammar matching for every command form and the
//! semantic checks interleaved with it: declaration registration,
//! undeclared-variable detection and operand type compatibility.

use crate::errors::errors::{ErrorImpl, ErrorKind};
use crate::lexer::lexer::tokenize;

use super::parser::parse;

fn parse_source(source: &str) -> Result<(), crate::errors::errors::Error> {
    let tokens = tokenize(source).unwrap();
    parse(&tokens, Some(source))
}

#[test]
fn test_parse_minimal_program() {
    let source = "program p var a: integer; begin a := a end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_program_without_declarations() {
    // A bare identifier command is a call, so nothing needs declaring.
    let source = "program p begin run end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_multiple_declaration_groups() {
    let source = "program p var a, b: integer; var r: real; begin a := b end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_while_command() {
    let source = "program p var i: integer; begin while i < 10 do i := i + 1 $ end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_if_then_else_command() {
    let source = "program p var a, b: integer; \
                  begin if a <> b then a := b else b := a $ end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_read_write_commands() {
    let source = "program p var a, b: integer; begin read(a, b); write(a) end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_procedure_with_params_and_locals() {
    let source = "program p \
                  var g: integer; \
                  procedure double(n: integer) \
                  var tmp: integer \
                  begin tmp := n + n end \
                  begin g := 1; double(g) end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_call_without_arguments() {
    let source = "program p begin setup; teardown end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_nested_parentheses_and_unary_signs() {
    let source = "program p var a, b: integer; begin a := -(a + b) * a / 2 + +b end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_missing_final_dot() {
    let source = "program p var a: integer; begin a := a end";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
    match error.detail() {
        ErrorImpl::UnexpectedToken { expected, found } => {
            assert_eq!(expected, "Dot");
            assert_eq!(found, "end of input");
        }
        other => panic!("unexpected error detail: {:?}", other),
    }
}

#[test]
fn test_parse_empty_command_section_is_rejected() {
    let source = "program p var a: integer; begin end.";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
}

#[test]
fn test_parse_error_reports_alternation_and_position() {
    let source = "program p\nvar a: boolean;\nbegin a := a end.";
    let error = parse_source(source).unwrap_err();

    // Malformed declarations fall back to empty, so the parser next
    // expects `begin` and finds the `var` still in the stream.
    assert_eq!(error.kind(), ErrorKind::Parse);
    match error.detail() {
        ErrorImpl::UnexpectedToken { expected, found } => {
            assert_eq!(expected, "Begin");
            assert_eq!(found, "Var");
        }
        other => panic!("unexpected error detail: {:?}", other),
    }
    assert_eq!(error.position().line, 2);
    assert!(error.context().unwrap().contains(">  var a: boolean;"));
}

#[test]
fn test_speculative_fallback_rolls_back_declarations() {
    // The first group parses fully (registering `a`) before the missing
    // colon fails the attempt; the rollback must erase `a` again, so the
    // later reference to it is undeclared only if declarations really
    // were discarded. The structural error at `begin` wins here.
    let source = "program p var a integer; begin a := a end.";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
    match error.detail() {
        ErrorImpl::UnexpectedToken { expected, .. } => assert_eq!(expected, "Begin"),
        other => panic!("unexpected error detail: {:?}", other),
    }
}

#[test]
fn test_undeclared_assignment_target() {
    let source = "program p var a: integer; begin b := a end.";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Semantic);
    match error.detail() {
        ErrorImpl::UndeclaredVariable { variable } => assert_eq!(variable, "b"),
        other => panic!("unexpected error detail: {:?}", other),
    }
}

#[test]
fn test_undeclared_expression_operand() {
    let source = "program p var a: integer; begin a := a + zz end.";
    let error = parse_source(source).unwrap_err();

    match error.detail() {
        ErrorImpl::UndeclaredVariable { variable } => assert_eq!(variable, "zz"),
        other => panic!("unexpected error detail: {:?}", other),
    }
}

#[test]
fn test_undeclared_read_argument() {
    let source = "program p var a: integer; begin read(a, b) end.";
    let error = parse_source(source).unwrap_err();

    match error.detail() {
        ErrorImpl::UndeclaredVariable { variable } => assert_eq!(variable, "b"),
        other => panic!("unexpected error detail: {:?}", other),
    }
}

#[test]
fn test_duplicate_declaration() {
    let source = "program p var a: integer; var a: real; begin a := a end.";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Semantic);
    match error.detail() {
        ErrorImpl::DuplicateDeclaration { variable } => assert_eq!(variable, "a"),
        other => panic!("unexpected error detail: {:?}", other),
    }
}

#[test]
fn test_duplicate_within_one_group() {
    let source = "program p var a, a: integer; begin a := a end.";
    let error = parse_source(source).unwrap_err();

    match error.detail() {
        ErrorImpl::DuplicateDeclaration { variable } => assert_eq!(variable, "a"),
        other => panic!("unexpected error detail: {:?}", other),
    }
}

// One flat table covers procedures too, so a local name colliding with a
// global one is a duplicate rather than a shadowing declaration.
#[test]
fn test_local_declaration_collides_with_global() {
    let source = "program p \
                  var a: integer; \
                  procedure q var a: integer begin a := a end \
                  begin a := a end.";
    let error = parse_source(source).unwrap_err();

    match error.detail() {
        ErrorImpl::DuplicateDeclaration { variable } => assert_eq!(variable, "a"),
        other => panic!("unexpected error detail: {:?}", other),
    }
}

#[test]
fn test_incompatible_expression_operands() {
    let source = "program p var a: integer; var r: real; begin a := a + r end.";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Semantic);
    match error.detail() {
        ErrorImpl::IncompatibleTypes {
            variables,
            expected,
        } => {
            assert_eq!(variables, &["a", "a", "r"]);
            assert_eq!(expected, "integer");
        }
        other => panic!("unexpected error detail: {:?}", other),
    }
}

// The assignment target joins the operand list, so a real target with an
// integer operand is caught even without a dedicated assignment check.
#[test]
fn test_assignment_target_joins_compatibility_check() {
    let source = "program p var a: integer; var r: real; begin r := a end.";
    let error = parse_source(source).unwrap_err();

    match error.detail() {
        ErrorImpl::IncompatibleTypes { expected, .. } => assert_eq!(expected, "real"),
        other => panic!("unexpected error detail: {:?}", other),
    }
}

#[test]
fn test_homogeneous_real_expression() {
    let source = "program p var r, s: real; begin r := r * s - s end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_literal_only_expression_is_untyped() {
    let source = "program p var r: real; begin r := 2.5 end.";
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_condition_operands_are_checked_per_expression() {
    let source = "program p var a, b: integer; var r, s: real; \
                  begin while a + b > r + s do run $ end.";
    // Each side of the relation is its own expression, and relations are
    // not part of the operand compatibility rule.
    assert!(parse_source(source).is_ok());
}

#[test]
fn test_parse_without_source_keeps_position_but_no_context() {
    let source = "program p var a: integer; begin a := a end";
    let tokens = tokenize(source).unwrap();
    let error = parse(&tokens, None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert!(error.context().is_none());
    assert_eq!(error.position().line, 1);
}

#[test]
fn test_parse_empty_token_stream() {
    let error = parse(&[], None).unwrap_err();

    match error.detail() {
        ErrorImpl::UnexpectedToken { expected, found } => {
            assert_eq!(expected, "Program");
            assert_eq!(found, "end of input");
        }
        other => panic!("unexpected error detail: {:?}", other),
    }
}
