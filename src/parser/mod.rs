//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns one instruction into one AST root. It handles:
//!
//! - Statement dispatch on the leading keyword (assignment, IF, ELSE,
//!   WHILE, WRITELN)
//! - Expression parsing by two ordered operator tiers, comparison before
//!   arithmetic, splitting at the first occurrence of the first operator
//!   found
//! - Integer, string and variable operands

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
