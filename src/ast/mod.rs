/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the closed statement enum
/// - expressions: The additive, multiplicative/relational and factor layers
/// - statements: Definitions for each statement kind
/// - types: The data types of the source language
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
