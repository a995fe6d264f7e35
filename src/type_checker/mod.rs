//! Type checking and semantic analysis module.
//!
//! This module builds the program's symbol table and type checks each
//! parsed statement against it:
//!
//! - Collecting `VAR` declarations and rejecting duplicates
//! - Resolving variable references in the single global scope
//! - Inferring expression types bottom-up
//! - Enforcing the assignment, arithmetic, comparison and condition rules,
//!   with INTEGER to REAL widening as the only implicit coercion

pub mod symbol_table;
pub mod type_checker;

#[cfg(test)]
mod tests;
