//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct and the entry point that turns
//! one instruction into one AST root. Statements are dispatched on their
//! leading token through a lookup table; expressions are split over token
//! slices by the two operator tiers in `lookups`.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize_mapped,
        tokens::{Token, TokenKind},
    },
    Position, SourceMap, Span,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The parser state for a single instruction.
///
/// Holds the instruction's tokens (ending in `EOF`), the instruction text
/// for error messages and the statement lookup table.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The instruction text the tokens came from
    source: String,
    /// Where the instruction text came from in the program text
    map: SourceMap,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, source: String, map: SourceMap) -> Self {
        Parser {
            tokens,
            pos: 0,
            source,
            map,
            stmt_lookup: HashMap::new(),
        }
    }

    fn eof_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    /// Returns the current token without advancing. Past the end this is
    /// the `EOF` token.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.eof_index())]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Kind of the token `n` places ahead of the current one.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens[(self.pos + n).min(self.eof_index())].kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.eof_index());
        self.pos = (self.pos + 1).min(self.eof_index());
        &self.tokens[index]
    }

    /// Moves the cursor to an absolute token index.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.eof_index());
    }

    /// Consumes every token up to `EOF`.
    pub fn finish(&mut self) {
        self.pos = self.eof_index();
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The tokens from the cursor up to, not including, `EOF`.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.pos.min(self.eof_index())..self.eof_index()]
    }

    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// The instruction text covered by `tokens`.
    pub fn text_of(&self, tokens: &[Token]) -> String {
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => {
                let start = self.map.to_local(first.span.start.0);
                let end = self.map.to_local(last.span.end.0);
                self.source.get(start..end).unwrap_or_default().to_string()
            }
            _ => String::new(),
        }
    }

    /// Span covering `tokens`, or an empty span at the cursor.
    pub fn span_of(&self, tokens: &[Token]) -> Span {
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => Span {
                start: first.span.start.clone(),
                end: last.span.end.clone(),
            },
            _ => Span {
                start: self.get_position(),
                end: self.get_position(),
            },
        }
    }

    /// The error for a statement that matches no grammar rule, naming the
    /// text from the cursor to the end of the instruction.
    pub fn unknown_instruction(&self) -> Error {
        Error::new(
            ErrorImpl::UnknownInstruction {
                instruction: self.text_of(self.remaining()),
            },
            self.get_position(),
        )
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a leading token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses one instruction into an AST root.
///
/// `instruction` must already have its trailing `;` removed. `offset` is
/// where the instruction starts in the program text.
///
/// # Returns
///
/// The statement node, or the first lexical or syntax error.
pub fn parse_instruction(instruction: &str, offset: u32, file: Rc<String>) -> Result<Node, Error> {
    parse_mapped_instruction(instruction, &SourceMap::starting_at(offset), file)
}

/// Parses an instruction joined from several source lines. `map` places
/// every byte of `instruction` back in the program text.
pub fn parse_mapped_instruction(
    instruction: &str,
    map: &SourceMap,
    file: Rc<String>,
) -> Result<Node, Error> {
    let tokens = tokenize_mapped(instruction, map.clone(), file)?;

    let mut parser = Parser::new(tokens, instruction.to_string(), map.clone());
    create_token_lookups(&mut parser);

    parse_stmt(&mut parser)
}
