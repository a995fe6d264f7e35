//! Unit tests for the symbol table builder and the type checker.

use std::rc::Rc;

use super::{
    symbol_table::{build_symbol_table, SymbolTable},
    type_checker::{type_check, TypeChecker},
};
use crate::{
    ast::{
        ast::{Node, NodeValue},
        types::{DeclaredType, LiteralValue, ValueType},
    },
    errors::errors::{Error, ErrorImpl},
    parser::parser::parse_instruction,
    Position, Span,
};

const DECLARATIONS: &str = "VAR\n  x, y: INTEGER;\n  r: REAL;\n  a, b: BOOLEAN;\n  c: CHAR;\nBEGIN\nEND.";

fn file() -> Rc<String> {
    Rc::new("test.pas".to_string())
}

fn table() -> SymbolTable {
    build_symbol_table(DECLARATIONS, file()).unwrap()
}

fn check(instruction: &str) -> Result<ValueType, Error> {
    let ast = parse_instruction(instruction, 0, file()).unwrap();
    type_check(&ast, &table())
}

fn check_err(instruction: &str) -> ErrorImpl {
    check(instruction).unwrap_err().kind().clone()
}

#[test]
fn test_build_symbol_table() {
    let symbols = table();

    assert_eq!(symbols.len(), 6);
    assert_eq!(symbols.get_variable("x"), Some(DeclaredType::Integer));
    assert_eq!(symbols.get_variable("y"), Some(DeclaredType::Integer));
    assert_eq!(symbols.get_variable("r"), Some(DeclaredType::Real));
    assert_eq!(symbols.get_variable("a"), Some(DeclaredType::Boolean));
    assert_eq!(symbols.get_variable("b"), Some(DeclaredType::Boolean));
    assert_eq!(symbols.get_variable("c"), Some(DeclaredType::Char));
    assert_eq!(symbols.get_variable("z"), None);
}

#[test]
fn test_name_lists_are_trimmed() {
    let symbols = build_symbol_table("VAR first ,second,  third : CHAR; BEGIN END.", file()).unwrap();

    assert_eq!(
        symbols.sorted(),
        vec![
            ("first", DeclaredType::Char),
            ("second", DeclaredType::Char),
            ("third", DeclaredType::Char),
        ]
    );
}

#[test]
fn test_var_section_may_end_at_end_dot() {
    let symbols = build_symbol_table("VAR n: INTEGER; END.", file()).unwrap();

    assert_eq!(symbols.len(), 1);
}

#[test]
fn test_empty_var_section() {
    let symbols = build_symbol_table("VAR\nBEGIN\nEND.", file()).unwrap();

    assert!(symbols.is_empty());
}

#[test]
fn test_missing_var_section() {
    let error = build_symbol_table("BEGIN x := 1; END.", file()).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::MissingVarSection);
}

#[test]
fn test_duplicate_in_one_statement() {
    let error = build_symbol_table("VAR a, a: INTEGER; BEGIN END.", file()).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::DuplicateDeclaration {
            variable: "a".to_string()
        }
    );
}

#[test]
fn test_duplicate_across_statements_with_different_types() {
    let source = "VAR\n  x: INTEGER;\n  x: REAL;\nBEGIN\nEND.";
    let error = build_symbol_table(source, file()).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::DuplicateDeclaration {
            variable: "x".to_string()
        }
    );
    assert!(source[error.get_position().0 as usize..].starts_with("x: REAL"));
}

#[test]
fn test_declare_variable_rejects_rebinding() {
    let mut symbols = SymbolTable::new();

    symbols
        .declare_variable("n".to_string(), DeclaredType::Integer, Position::null())
        .unwrap();
    let error = symbols
        .declare_variable("n".to_string(), DeclaredType::Integer, Position::null())
        .unwrap_err();

    assert_eq!(error.get_error_name(), "DuplicateDeclaration");
    assert_eq!(symbols.get_variable("n"), Some(DeclaredType::Integer));
}

#[test]
fn test_integer_literal_round_trip() {
    let ast = parse_instruction("x := 42", 0, file()).unwrap();
    let symbols = table();
    let checker = TypeChecker::new(&symbols);

    let NodeValue::Assignment { value, .. } = &ast.value else {
        panic!("Expected assignment");
    };
    assert_eq!(
        checker.check_node(value).unwrap(),
        (Some(LiteralValue::Integer(42)), ValueType::Integer)
    );
}

#[test]
fn test_string_literal_type() {
    let ast = parse_instruction("WRITELN('hi')", 0, file()).unwrap();
    let symbols = table();
    let checker = TypeChecker::new(&symbols);

    let NodeValue::Write { arguments } = &ast.value else {
        panic!("Expected write");
    };
    assert_eq!(
        checker.check_node(&arguments[0]).unwrap(),
        (Some(LiteralValue::String("hi".to_string())), ValueType::String)
    );
}

#[test]
fn test_integer_assignment() {
    assert_eq!(check("x := 1 + 2").unwrap(), ValueType::Integer);
}

#[test]
fn test_integer_widens_to_real() {
    assert_eq!(check("r := 1").unwrap(), ValueType::Real);
    assert_eq!(check("r := x * y").unwrap(), ValueType::Real);
}

#[test]
fn test_real_does_not_narrow_to_integer() {
    assert_eq!(
        check_err("x := r"),
        ErrorImpl::AssignmentTypeMismatch {
            expected: "INTEGER".to_string(),
            received: "REAL".to_string()
        }
    );
}

#[test]
fn test_string_literal_is_not_a_char() {
    assert_eq!(
        check_err("c := 'z'"),
        ErrorImpl::AssignmentTypeMismatch {
            expected: "CHAR".to_string(),
            received: "STRING".to_string()
        }
    );
}

#[test]
fn test_comparison_assigns_to_boolean() {
    assert_eq!(check("a := x < y").unwrap(), ValueType::Boolean);
    assert_eq!(check("a := 'p' = 'q'").unwrap(), ValueType::Boolean);
}

#[test]
fn test_if_statement() {
    assert_eq!(check("IF x = y THEN x := 1").unwrap(), ValueType::Void);
    assert_eq!(check("IF a THEN x := 1").unwrap(), ValueType::Void);
}

#[test]
fn test_if_condition_must_be_boolean() {
    assert_eq!(
        check_err("IF x THEN y := 1"),
        ErrorImpl::ConditionTypeError {
            statement: "IF".to_string(),
            received: "INTEGER".to_string()
        }
    );
}

#[test]
fn test_then_branch_is_checked() {
    assert_eq!(
        check_err("IF a = b THEN x := c"),
        ErrorImpl::AssignmentTypeMismatch {
            expected: "INTEGER".to_string(),
            received: "CHAR".to_string()
        }
    );
}

#[test]
fn test_while_statement() {
    assert_eq!(check("WHILE x < 10 DO x := x + 1").unwrap(), ValueType::Void);
    assert_eq!(
        check_err("WHILE r DO x := 1"),
        ErrorImpl::ConditionTypeError {
            statement: "WHILE".to_string(),
            received: "REAL".to_string()
        }
    );
}

#[test]
fn test_standalone_else_is_checked_on_its_own() {
    assert_eq!(check("ELSE x := 1").unwrap(), ValueType::Void);
    assert_eq!(
        check_err("ELSE x := a"),
        ErrorImpl::AssignmentTypeMismatch {
            expected: "INTEGER".to_string(),
            received: "BOOLEAN".to_string()
        }
    );
}

#[test]
fn test_write_accepts_any_types() {
    assert_eq!(check("WRITELN('x is', x, r, a, c)").unwrap(), ValueType::Void);
}

#[test]
fn test_write_propagates_argument_errors() {
    assert_eq!(
        check_err("WRITELN(x + r)"),
        ErrorImpl::ArithmeticTypeError {
            left: "INTEGER".to_string(),
            right: "REAL".to_string()
        }
    );
}

#[test]
fn test_arithmetic_requires_integers() {
    assert_eq!(
        check_err("r := r + 1"),
        ErrorImpl::ArithmeticTypeError {
            left: "REAL".to_string(),
            right: "INTEGER".to_string()
        }
    );
}

#[test]
fn test_comparison_type_mismatch() {
    assert_eq!(
        check_err("IF c = a THEN x := 1"),
        ErrorImpl::ComparisonTypeMismatch {
            left: "CHAR".to_string(),
            right: "BOOLEAN".to_string()
        }
    );
}

#[test]
fn test_no_widening_inside_comparisons() {
    assert_eq!(
        check_err("a := r = 1"),
        ErrorImpl::ComparisonTypeMismatch {
            left: "REAL".to_string(),
            right: "INTEGER".to_string()
        }
    );
}

#[test]
fn test_undeclared_variable_in_every_position() {
    for instruction in [
        "z := 1",
        "x := z + 1",
        "IF z = 1 THEN x := 1",
        "IF x = 1 THEN z := 1",
        "WHILE x < z DO x := 1",
        "WRITELN('value', z)",
        "ELSE z := 2",
    ] {
        assert_eq!(
            check_err(instruction),
            ErrorImpl::UndeclaredVariable {
                variable: "z".to_string()
            },
            "{}",
            instruction
        );
    }
}

#[test]
fn test_assignment_value_checked_before_target() {
    assert_eq!(
        check_err("p := q"),
        ErrorImpl::UndeclaredVariable {
            variable: "q".to_string()
        }
    );
}

#[test]
fn test_undeclared_variable_position() {
    let ast = parse_instruction("x := y + z", 40, file()).unwrap();
    let error = type_check(&ast, &table()).unwrap_err();

    assert_eq!(error.get_position().0, 49);
}

#[test]
fn test_expression_root_is_an_internal_error() {
    let span = Span {
        start: Position::null(),
        end: Position::null(),
    };
    let ast = Node::new(NodeValue::Integer(1), span);
    let error = type_check(&ast, &table()).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnknownNodeKind {
            kind: "Integer".to_string()
        }
    );
    assert!(error.is_internal());
}
