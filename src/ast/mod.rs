/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The node tree built by the parser
/// - types: Declared/value types and operator definitions
pub mod ast;
pub mod types;
