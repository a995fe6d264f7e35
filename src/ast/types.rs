//! Type and operator definitions shared by the AST and the type checker.
//!
//! - `DeclaredType`: the types a variable may be declared with
//! - `ValueType`: the types computed for expressions and statements
//! - Comparison and arithmetic operators, kept in their scan order

use std::fmt::Display;

/// The types allowed after the `:` of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Integer,
    Real,
    Boolean,
    Char,
}

impl DeclaredType {
    pub fn from_keyword(keyword: &str) -> Option<DeclaredType> {
        match keyword {
            "INTEGER" => Some(DeclaredType::Integer),
            "REAL" => Some(DeclaredType::Real),
            "BOOLEAN" => Some(DeclaredType::Boolean),
            "CHAR" => Some(DeclaredType::Char),
            _ => None,
        }
    }
}

impl Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ValueType::from(*self).fmt(f)
    }
}

/// Types produced by semantic analysis. `Void` marks statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Real,
    Boolean,
    Char,
    String,
    Void,
}

impl From<DeclaredType> for ValueType {
    fn from(ty: DeclaredType) -> Self {
        match ty {
            DeclaredType::Integer => ValueType::Integer,
            DeclaredType::Real => ValueType::Real,
            DeclaredType::Boolean => ValueType::Boolean,
            DeclaredType::Char => ValueType::Char,
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::Integer => "INTEGER",
            ValueType::Real => "REAL",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Char => "CHAR",
            ValueType::String => "STRING",
            ValueType::Void => "VOID",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
}

impl Display for ComparisonOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            ComparisonOp::Less => "<",
            ComparisonOp::LessEquals => "<=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterEquals => ">=",
            ComparisonOp::Equals => "=",
            ComparisonOp::NotEquals => "<>",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Subtract => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// A literal value surfaced by the type checker for literal nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    String(String),
}
