use crate::{
    ast::{
        expressions::{BinaryOp, Expression, Factor, Term},
        statements::{AssignOp, Parameter},
        types::DataType,
    },
    errors::{errors::ErrorImpl, reporter::ErrorReporter},
    symbols::{
        symbol::{Function, Symbol, Variable},
        symbol_table::SymbolTable,
    },
};

/// Names that are never checked as variable uses.
pub const RESERVED_WORDS: [&str; 6] = ["int", "double", "if", "while", "for", "return"];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Declaration, initialization, typing and usage rules.
///
/// Every check reports into the reporter and returns a best-effort value;
/// nothing here aborts the analysis.
pub struct Validator<'r> {
    table: SymbolTable,
    reporter: &'r mut ErrorReporter,
}

impl<'r> Validator<'r> {
    pub fn new(reporter: &'r mut ErrorReporter) -> Self {
        Validator {
            table: SymbolTable::new(),
            reporter,
        }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut SymbolTable {
        &mut self.table
    }

    pub fn into_table(self) -> SymbolTable {
        self.table
    }

    fn report(&mut self, line: usize, error: ErrorImpl) {
        self.reporter.report_semantic(line, error);
    }

    /// `DoubleDeclaration` if `name` already exists in the innermost scope.
    pub fn check_double_declaration(&mut self, name: &str, line: usize) -> bool {
        if self.table.lookup_current(name).is_some() {
            self.report(
                line,
                ErrorImpl::DoubleDeclaration {
                    variable: name.to_string(),
                },
            );
            return false;
        }

        true
    }

    /// Declares a variable in the innermost scope.
    ///
    /// The initializer, when present, is type-checked against the declared
    /// type and makes the variable initialized at `line`.
    pub fn check_declaration(
        &mut self,
        name: &str,
        data_type: DataType,
        initializer: Option<&Expression>,
        line: usize,
    ) -> bool {
        if !self.check_double_declaration(name, line) {
            return false;
        }

        let mut variable = Variable::new(name, data_type, line);

        if let Some(initializer) = initializer {
            let actual = self.infer_type(initializer);
            self.check_assignable(
                Some(data_type),
                actual,
                line,
                &format!("Inicialización de '{}'", name),
            );
            variable.initialize(line);
        }

        self.table.declare(Symbol::Variable(variable))
    }

    /// Parameters live in the function scope and start out initialized.
    pub fn declare_parameter(&mut self, parameter: &Parameter, line: usize) -> bool {
        if !self.check_double_declaration(&parameter.name, line) {
            return false;
        }

        self.table.declare(Symbol::Variable(
            Variable::new(parameter.name.as_str(), parameter.data_type, line).initialized(line),
        ))
    }

    /// Declares a function (or prototype) in the innermost scope.
    ///
    /// A prototype with the same return type may be repeated or completed
    /// by a definition; any other clash is `FunctionAlreadyDeclared`.
    pub fn declare_function(&mut self, function: Function) -> bool {
        let line = function.line;

        let completes = match self.table.lookup_current(&function.name) {
            None => return self.table.declare(Symbol::Function(function)),
            Some(Symbol::Function(existing)) => {
                !existing.defined && existing.return_type == function.return_type
            }
            Some(Symbol::Variable(_)) => false,
        };

        if !completes {
            self.report(
                line,
                ErrorImpl::FunctionAlreadyDeclared {
                    function: function.name,
                },
            );
            return false;
        }

        if !function.defined {
            return true;
        }

        match self.table.current_scope_mut() {
            Some(scope) => scope.replace(Symbol::Function(function)),
            None => false,
        }
    }

    /// Type of an expression, folded left to right through each layer.
    ///
    /// `None` means the type could not be determined, e.g. because a name
    /// did not resolve.
    pub fn infer_type(&mut self, expr: &Expression) -> Option<DataType> {
        let mut result = self.infer_term(&expr.first);

        for (operator, term) in &expr.rest {
            let right = self.infer_term(term);
            result = self.combine(result, right, *operator, term.line());
        }

        result
    }

    fn infer_term(&mut self, term: &Term) -> Option<DataType> {
        let mut result = self.infer_factor(&term.first);

        for (operator, factor) in &term.rest {
            let right = self.infer_factor(factor);
            result = self.combine(result, right, *operator, factor.line());
        }

        result
    }

    fn infer_factor(&mut self, factor: &Factor) -> Option<DataType> {
        match factor {
            Factor::Number { text, .. } => {
                if text.contains('.') {
                    Some(DataType::Double)
                } else {
                    Some(DataType::Int)
                }
            }
            Factor::Identifier { name, .. } | Factor::Call { name, .. } => {
                self.table.resolve(name).map(|symbol| symbol.data_type())
            }
            Factor::Group { inner, .. } => self.infer_type(inner),
        }
    }

    /// Result type of `left op right`.
    pub fn combine(
        &mut self,
        left: Option<DataType>,
        right: Option<DataType>,
        operator: BinaryOp,
        line: usize,
    ) -> Option<DataType> {
        if operator.is_relational() {
            if let (Some(l), Some(r)) = (left, right) {
                if l != r && !(l.is_numeric() && r.is_numeric()) {
                    self.report(
                        line,
                        ErrorImpl::IncompatibleComparison {
                            left: l.to_string(),
                            right: r.to_string(),
                        },
                    );
                }
            }
            return Some(DataType::Int);
        }

        if operator == BinaryOp::Mod {
            if let (Some(l), Some(r)) = (left, right) {
                if l != DataType::Int || r != DataType::Int {
                    self.report(
                        line,
                        ErrorImpl::InvalidModulo {
                            left: l.to_string(),
                            right: r.to_string(),
                        },
                    );
                }
            }
            return Some(DataType::Int);
        }

        let (l, r) = (left?, right?);

        match (l, r) {
            (DataType::Int, DataType::Int) => Some(DataType::Int),
            (DataType::Double, other) | (other, DataType::Double) if other.is_numeric() => {
                Some(DataType::Double)
            }
            _ => {
                self.report(
                    line,
                    ErrorImpl::IncompatibleOperation {
                        operator: operator.to_string(),
                        left: l.to_string(),
                        right: r.to_string(),
                    },
                );
                Some(l)
            }
        }
    }

    /// Equal types and `int` into `double` are compatible. Unknown types
    /// are never reported.
    pub fn check_assignable(
        &mut self,
        expected: Option<DataType>,
        actual: Option<DataType>,
        line: usize,
        context: &str,
    ) -> bool {
        let (expected, actual) = match (expected, actual) {
            (Some(expected), Some(actual)) => (expected, actual),
            _ => return true,
        };

        if expected == actual || (expected == DataType::Double && actual == DataType::Int) {
            return true;
        }

        self.report(
            line,
            ErrorImpl::IncompatibleType {
                expected: expected.to_string(),
                actual: actual.to_string(),
                context: context.to_string(),
            },
        );
        false
    }

    /// A read of `name`: must be declared and initialized. Marks it used.
    pub fn check_use(&mut self, name: &str, line: usize) -> bool {
        let initialized = match self.table.resolve(name) {
            Some(symbol) => symbol.is_initialized(),
            None => {
                self.report(
                    line,
                    ErrorImpl::UndeclaredVariable {
                        variable: name.to_string(),
                    },
                );
                return false;
            }
        };

        if !initialized {
            self.report(
                line,
                ErrorImpl::UseBeforeInit {
                    variable: name.to_string(),
                },
            );
            return false;
        }

        if let Some(symbol) = self.table.resolve_mut(name) {
            symbol.mark_used();
        }
        true
    }

    /// A write to `name`. The target becomes initialized even when the
    /// value has the wrong type.
    pub fn check_assignment(
        &mut self,
        name: &str,
        operator: AssignOp,
        value: &Expression,
        line: usize,
    ) -> bool {
        let expected = match self.table.resolve_mut(name) {
            Some(symbol) => {
                symbol.initialize(line);
                symbol.data_type()
            }
            None => {
                self.report(
                    line,
                    ErrorImpl::UndeclaredVariable {
                        variable: name.to_string(),
                    },
                );
                return false;
            }
        };

        let mut actual = self.infer_type(value);
        if let Some(binary) = operator.binary() {
            actual = self.combine(Some(expected), actual, binary, line);
        }

        self.check_assignable(
            Some(expected),
            actual,
            line,
            &format!("Asignación a '{}'", name),
        );
        true
    }

    /// `i++` / `i--`: a read followed by a write.
    pub fn check_step(&mut self, name: &str, line: usize) -> bool {
        if !self.check_use(name, line) {
            return false;
        }

        if let Some(symbol) = self.table.resolve_mut(name) {
            symbol.initialize(line);
        }
        true
    }

    /// Reports every variable of every open scope that was never read.
    pub fn check_unused(&mut self) {
        let unused: Vec<(usize, String)> = self
            .table
            .scopes()
            .iter()
            .flat_map(|scope| scope.iter())
            .filter_map(Symbol::as_variable)
            .filter(|variable| !variable.used)
            .map(|variable| (variable.line, variable.name.clone()))
            .collect();

        for (line, variable) in unused {
            self.report(line, ErrorImpl::UnusedVariable { variable });
        }
    }
}
