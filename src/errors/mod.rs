//! Error types and error handling for the validator.
//!
//! This module defines the error types used by every stage of the
//! analysis pipeline. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for declarations, parsing and type checking
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
