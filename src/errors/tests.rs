//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.pas".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.pas".to_string()));
    let error = Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: "y".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.pas");
}

#[test]
fn test_missing_var_section_error() {
    let error = Error::new(ErrorImpl::MissingVarSection, Position::null());

    assert_eq!(error.get_error_name(), "MissingVarSection");
    assert_eq!(error.to_string(), "no VAR section found in the source code");
}

#[test]
fn test_duplicate_declaration_error() {
    let error = Error::new(
        ErrorImpl::DuplicateDeclaration {
            variable: "x".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "DuplicateDeclaration");
    assert_eq!(error.to_string(), "duplicate declaration of variable: x");
}

#[test]
fn test_assignment_type_mismatch_message() {
    let error = Error::new(
        ErrorImpl::AssignmentTypeMismatch {
            expected: "INTEGER".to_string(),
            received: "STRING".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "AssignmentTypeMismatch");
    assert_eq!(
        error.to_string(),
        "type mismatch: cannot assign STRING to INTEGER"
    );
}

#[test]
fn test_condition_type_error_names_statement() {
    let error = Error::new(
        ErrorImpl::ConditionTypeError {
            statement: "WHILE".to_string(),
            received: "INTEGER".to_string(),
        },
        Position::null(),
    );

    assert_eq!(
        error.to_string(),
        "WHILE condition must evaluate to BOOLEAN, received INTEGER"
    );
}

#[test]
fn test_unknown_node_kind_is_internal() {
    let internal = Error::new(
        ErrorImpl::UnknownNodeKind {
            kind: "Block".to_string(),
        },
        Position::null(),
    );
    let user = Error::new(
        ErrorImpl::UnknownInstruction {
            instruction: "GOTO 10".to_string(),
        },
        Position::null(),
    );

    assert!(internal.is_internal());
    assert!(!user.is_internal());
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ComparisonTypeMismatch {
            left: "CHAR".to_string(),
            right: "BOOLEAN".to_string(),
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Cannot compare `CHAR` with `BOOLEAN`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_kind_accessor() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position::null(),
    );

    assert_eq!(
        error.kind(),
        &ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string()
        }
    );
}
