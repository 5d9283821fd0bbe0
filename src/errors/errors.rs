use std::fmt::Display;

use thiserror::Error;

/// The two families of diagnostics the compiler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntactic,
    Semantic,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntactic => write!(f, "SINTÁCTICO"),
            ErrorKind::Semantic => write!(f, "SEMÁNTICO"),
        }
    }
}

/// A located diagnostic.
///
/// Created once and never mutated afterwards; the reporter keeps them in
/// discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::Syntax { .. } => ErrorKind::Syntactic,
            _ => ErrorKind::Semantic,
        }
    }

    /// The user-facing message, without the kind and line prefix.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Syntax { .. } => "Syntax",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::UseBeforeInit { .. } => "UseBeforeInit",
            ErrorImpl::DoubleDeclaration { .. } => "DoubleDeclaration",
            ErrorImpl::UnusedVariable { .. } => "UnusedVariable",
            ErrorImpl::IncompatibleType { .. } => "IncompatibleType",
            ErrorImpl::IncompatibleComparison { .. } => "IncompatibleComparison",
            ErrorImpl::InvalidModulo { .. } => "InvalidModulo",
            ErrorImpl::IncompatibleOperation { .. } => "IncompatibleOperation",
            ErrorImpl::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UndeclaredVariable { variable } => ErrorTip::Suggestion(format!(
                "declare `{}` before using it, e.g. `int {};`",
                variable, variable
            )),
            ErrorImpl::UseBeforeInit { variable } => ErrorTip::Suggestion(format!(
                "assign a value to `{}` before reading it",
                variable
            )),
            ErrorImpl::UnusedVariable { variable } => ErrorTip::Suggestion(format!(
                "remove `{}` or use it in an expression",
                variable
            )),
            ErrorImpl::IncompatibleType { expected, .. } if expected == "int" => {
                ErrorTip::Suggestion(String::from(
                    "`double` values are never converted to `int` implicitly",
                ))
            }
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] Línea {}: {}",
            self.get_kind(),
            self.line,
            self.internal_error
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{message}")]
    Syntax { message: String },
    #[error("Variable '{variable}' no ha sido declarada")]
    UndeclaredVariable { variable: String },
    #[error("Variable '{variable}' usada sin inicializar")]
    UseBeforeInit { variable: String },
    #[error("Variable '{variable}' ya fue declarada en este contexto")]
    DoubleDeclaration { variable: String },
    #[error("Variable '{variable}' declarada pero no usada")]
    UnusedVariable { variable: String },
    #[error("{prefix}Tipo incompatible: se intenta asignar '{actual}' a variable de tipo '{expected}'", prefix = context_prefix(.context))]
    IncompatibleType {
        expected: String,
        actual: String,
        context: String,
    },
    #[error("Comparación incompatible entre '{left}' y '{right}'")]
    IncompatibleComparison { left: String, right: String },
    #[error("El operador '%' requiere operandos 'int', se recibió '{left}' y '{right}'")]
    InvalidModulo { left: String, right: String },
    #[error("Operación '{operator}' incompatible entre '{left}' y '{right}'")]
    IncompatibleOperation {
        operator: String,
        left: String,
        right: String,
    },
    #[error("Función '{function}' ya fue declarada en este contexto")]
    FunctionAlreadyDeclared { function: String },
}

fn context_prefix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("{}: ", context)
    }
}
