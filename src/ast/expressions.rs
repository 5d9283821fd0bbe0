use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    NotEquals,
}

impl BinaryOp {
    pub fn additive(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Dash => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub fn multiplicative(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub fn relational(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::LessEquals => Some(BinaryOp::LessEquals),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::GreaterEquals => Some(BinaryOp::GreaterEquals),
            TokenKind::Equals => Some(BinaryOp::Equals),
            TokenKind::NotEquals => Some(BinaryOp::NotEquals),
            _ => None,
        }
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOp::Less
                | BinaryOp::LessEquals
                | BinaryOp::Greater
                | BinaryOp::GreaterEquals
                | BinaryOp::Equals
                | BinaryOp::NotEquals
        )
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Less => "<",
            BinaryOp::LessEquals => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// EXPRESSION LAYERS

/// Additive level: `term (('+'|'-') term)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub first: Term,
    pub rest: Vec<(BinaryOp, Term)>,
}

impl Expression {
    pub fn line(&self) -> usize {
        self.first.line()
    }
}

/// Multiplicative/relational level: `factor (mulop factor)* (relop factor)*`.
///
/// The grammar keeps multiplicative operators ahead of relational ones, so
/// `rest` always lists them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub first: Factor,
    pub rest: Vec<(BinaryOp, Factor)>,
}

impl Term {
    pub fn line(&self) -> usize {
        self.first.line()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    /// Literal text exactly as written, e.g. `42` or `3.14`.
    Number { text: String, line: usize },
    Identifier { name: String, line: usize },
    Call {
        name: String,
        arguments: Vec<Expression>,
        line: usize,
    },
    Group { inner: Box<Expression>, line: usize },
}

impl Factor {
    pub fn line(&self) -> usize {
        match self {
            Factor::Number { line, .. }
            | Factor::Identifier { line, .. }
            | Factor::Call { line, .. }
            | Factor::Group { line, .. } => *line,
        }
    }
}
