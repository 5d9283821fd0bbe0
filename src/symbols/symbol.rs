use std::fmt::Display;

use crate::ast::{statements::Parameter, types::DataType};

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub data_type: DataType,
    pub line: usize,
    /// Line of the first initialization, if any.
    pub initialized_at: Option<usize>,
    pub used: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, data_type: DataType, line: usize) -> Self {
        Variable {
            name: name.into(),
            data_type,
            line,
            initialized_at: None,
            used: false,
        }
    }

    /// Builder used for parameters and declarations with an initializer.
    pub fn initialized(mut self, line: usize) -> Self {
        self.initialize(line);
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized_at.is_some()
    }

    /// Records an initialization. Later ones keep the first line.
    pub fn initialize(&mut self, line: usize) {
        if self.initialized_at.is_none() {
            self.initialized_at = Some(line);
        }
    }

    pub fn mark_used(&mut self) {
        self.used = true;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub return_type: DataType,
    pub parameters: Vec<Parameter>,
    pub line: usize,
    /// `false` for a prototype that has not been completed by a definition.
    pub defined: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Variable(Variable),
    Function(Function),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Variable(variable) => &variable.name,
            Symbol::Function(function) => &function.name,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Symbol::Variable(variable) => variable.line,
            Symbol::Function(function) => function.line,
        }
    }

    /// Declared type of a variable, return type of a function.
    pub fn data_type(&self) -> DataType {
        match self {
            Symbol::Variable(variable) => variable.data_type,
            Symbol::Function(function) => function.return_type,
        }
    }

    /// Functions are always considered initialized.
    pub fn is_initialized(&self) -> bool {
        match self {
            Symbol::Variable(variable) => variable.is_initialized(),
            Symbol::Function(_) => true,
        }
    }

    pub fn mark_used(&mut self) {
        if let Symbol::Variable(variable) = self {
            variable.mark_used();
        }
    }

    pub fn initialize(&mut self, line: usize) {
        if let Symbol::Variable(variable) = self {
            variable.initialize(line);
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Symbol::Variable(variable) => Some(variable),
            Symbol::Function(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Symbol::Function(function) => Some(function),
            Symbol::Variable(_) => None,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Variable(variable) => {
                write!(
                    f,
                    "variable {} : {} (línea {})",
                    variable.name, variable.data_type, variable.line
                )?;
                match variable.initialized_at {
                    Some(line) => write!(f, " inicializada en línea {}", line)?,
                    None => write!(f, " sin inicializar")?,
                }
                if variable.used {
                    write!(f, ", usada")?;
                }
                Ok(())
            }
            Symbol::Function(function) => {
                let parameters: Vec<String> = function
                    .parameters
                    .iter()
                    .map(|p| format!("{} {}", p.data_type, p.name))
                    .collect();

                write!(
                    f,
                    "función {}({}) -> {} (línea {})",
                    function.name,
                    parameters.join(", "),
                    function.return_type,
                    function.line
                )?;
                if !function.defined {
                    write!(f, " [prototipo]")?;
                }
                Ok(())
            }
        }
    }
}
