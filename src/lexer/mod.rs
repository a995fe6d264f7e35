//! Lexical analysis module for the validator.
//!
//! This module contains the lexer (tokenizer) that converts one instruction
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
