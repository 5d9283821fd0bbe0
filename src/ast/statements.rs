use crate::lexer::tokens::TokenKind;

use super::{
    ast::Stmt,
    expressions::{BinaryOp, Expression},
    types::DataType,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub line: usize,
}

/// One name of a declaration, e.g. `b = 2` in `int a, b = 2;`.
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: String,
    pub initializer: Option<Expression>,
}

/// `int a = 1, b, c = a;` with every declared name flattened in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationStmt {
    pub data_type: DataType,
    pub declarators: Vec<Declarator>,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl AssignOp {
    pub fn from_token(kind: TokenKind) -> Option<AssignOp> {
        match kind {
            TokenKind::Assignment => Some(AssignOp::Assign),
            TokenKind::PlusEquals => Some(AssignOp::Add),
            TokenKind::MinusEquals => Some(AssignOp::Sub),
            TokenKind::StarEquals => Some(AssignOp::Mul),
            TokenKind::SlashEquals => Some(AssignOp::Div),
            TokenKind::PercentEquals => Some(AssignOp::Mod),
            _ => None,
        }
    }

    /// The operator a compound assignment desugars to; `None` for `=`.
    pub fn binary(&self) -> Option<BinaryOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::Add => Some(BinaryOp::Add),
            AssignOp::Sub => Some(BinaryOp::Sub),
            AssignOp::Mul => Some(BinaryOp::Mul),
            AssignOp::Div => Some(BinaryOp::Div),
            AssignOp::Mod => Some(BinaryOp::Mod),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: String,
    pub operator: AssignOp,
    pub value: Expression,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expression,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expression,
    pub body: Box<Stmt>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Declaration(DeclarationStmt),
    Assignment(AssignmentStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForStep {
    Increment { target: String, line: usize },
    Decrement { target: String, line: usize },
    Assignment(AssignmentStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub condition: Option<Expression>,
    pub step: Option<ForStep>,
    pub body: Box<Stmt>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStmt {
    pub return_type: DataType,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: BlockStmt,
    pub line: usize,
}

/// A function signature without a body: `int f(int a);`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrototypeStmt {
    pub return_type: DataType,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expression>,
    pub line: usize,
}
