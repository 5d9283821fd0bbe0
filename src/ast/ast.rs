use super::statements::{
    AssignmentStmt, BlockStmt, DeclarationStmt, ForStmt, FunctionStmt, IfStmt, PrototypeStmt,
    ReturnStmt, WhileStmt,
};

/// Root of a parsed source unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// Statement Types
///
/// Closed set of statement kinds; every pass matches on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Declaration(DeclarationStmt),
    Assignment(AssignmentStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Function(FunctionStmt),
    Prototype(PrototypeStmt),
    Return(ReturnStmt),
}

impl Stmt {
    /// Line of the statement's first token.
    pub fn line(&self) -> usize {
        match self {
            Stmt::Block(stmt) => stmt.line,
            Stmt::Declaration(stmt) => stmt.line,
            Stmt::Assignment(stmt) => stmt.line,
            Stmt::If(stmt) => stmt.line,
            Stmt::While(stmt) => stmt.line,
            Stmt::For(stmt) => stmt.line,
            Stmt::Function(stmt) => stmt.line,
            Stmt::Prototype(stmt) => stmt.line,
            Stmt::Return(stmt) => stmt.line,
        }
    }
}
