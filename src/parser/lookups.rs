use std::collections::HashMap;

use crate::{
    ast::{
        ast::Node,
        types::{ArithmeticOp, ComparisonOp},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

/// Comparison operators in scan order. The first one present anywhere in an
/// expression wins, even if a later one occurs earlier in the text.
pub const COMPARISON_TIER: [(TokenKind, ComparisonOp); 6] = [
    (TokenKind::Less, ComparisonOp::Less),
    (TokenKind::LessEquals, ComparisonOp::LessEquals),
    (TokenKind::Greater, ComparisonOp::Greater),
    (TokenKind::GreaterEquals, ComparisonOp::GreaterEquals),
    (TokenKind::Equals, ComparisonOp::Equals),
    (TokenKind::NotEquals, ComparisonOp::NotEquals),
];

/// Arithmetic operators in scan order, only consulted when no comparison
/// operator is present.
pub const ARITHMETIC_TIER: [(TokenKind, ArithmeticOp); 4] = [
    (TokenKind::Plus, ArithmeticOp::Add),
    (TokenKind::Dash, ArithmeticOp::Subtract),
    (TokenKind::Star, ArithmeticOp::Multiply),
    (TokenKind::Slash, ArithmeticOp::Divide),
];

pub fn create_token_lookups(parser: &mut Parser) {
    // Assignment is the only statement led by a plain identifier
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Else, parse_else_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Writeln, parse_write_stmt);
}
