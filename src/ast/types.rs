//! Data types of the source language.
//!
//! Variables are `int` or `double`; `void` only appears as a function
//! return type.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    Double,
    Void,
}

impl DataType {
    pub fn from_token(kind: TokenKind) -> Option<DataType> {
        match kind {
            TokenKind::Int => Some(DataType::Int),
            TokenKind::Double => Some(DataType::Double),
            TokenKind::Void => Some(DataType::Void),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Double => "double",
            DataType::Void => "void",
        }
    }

    /// `int` and `double` are the only types arithmetic is defined on.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int | DataType::Double)
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
