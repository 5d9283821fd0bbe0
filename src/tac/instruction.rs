use std::fmt::Display;

use crate::ast::expressions::BinaryOp;

/// A single three-address instruction. Operands are names, temporaries or
/// literal text.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// `target = left op right`
    Binary {
        target: String,
        left: String,
        operator: BinaryOp,
        right: String,
    },
    /// `target = value`
    Copy { target: String, value: String },
    Label(String),
    IfNotGoto { condition: String, label: String },
    Goto(String),
    Param(String),
    /// `target = call function`
    Call { target: String, function: String },
    Declare(String),
    Return(Option<String>),
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Binary {
                target,
                left,
                operator,
                right,
            } => write!(f, "{} = {} {} {}", target, left, operator, right),
            Instruction::Copy { target, value } => write!(f, "{} = {}", target, value),
            Instruction::Label(label) => write!(f, "{}:", label),
            Instruction::IfNotGoto { condition, label } => {
                write!(f, "if not {} goto {}", condition, label)
            }
            Instruction::Goto(label) => write!(f, "goto {}", label),
            Instruction::Param(value) => write!(f, "param {}", value),
            Instruction::Call { target, function } => write!(f, "{} = call {}", target, function),
            Instruction::Declare(name) => write!(f, "DECLARE {}", name),
            Instruction::Return(Some(value)) => write!(f, "return {}", value),
            Instruction::Return(None) => write!(f, "return"),
        }
    }
}
