use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("VAR", TokenKind::Var);
        map.insert("BEGIN", TokenKind::Begin);
        map.insert("END", TokenKind::End);
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ELSE", TokenKind::Else);
        map.insert("WHILE", TokenKind::While);
        map.insert("DO", TokenKind::Do);
        map.insert("WRITELN", TokenKind::Writeln);
        map.insert("INTEGER", TokenKind::Integer);
        map.insert("REAL", TokenKind::Real);
        map.insert("BOOLEAN", TokenKind::Boolean);
        map.insert("CHAR", TokenKind::Char);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenParen,
    CloseParen,

    ColonEquals, // :=
    Equals,      // =
    NotEquals,   // <>

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Dot,
    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Var,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Writeln,
    Integer,
    Real,
    Boolean,
    Char,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}
