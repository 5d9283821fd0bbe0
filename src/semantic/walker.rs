//! Validation traversal.
//!
//! Walks the tree once, opening a scope for every function, `if`, `while`
//! and `for`, and runs the validator at each declaration, assignment and
//! name use. Bare `{ ... }` blocks share their enclosing scope.

use crate::{
    ast::{
        ast::{Program, Stmt},
        expressions::{Expression, Factor, Term},
        statements::{
            AssignmentStmt, BlockStmt, DeclarationStmt, ForInit, ForStep, ForStmt, FunctionStmt,
            IfStmt, PrototypeStmt, WhileStmt,
        },
    },
    errors::reporter::ErrorReporter,
    symbols::{symbol::Function, symbol_table::SymbolTable},
};

use super::{
    stats::Stats,
    validator::{is_reserved, Validator},
};

/// Result of the validation walk.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Scopes still open when the walk finished, i.e. the global scope.
    pub symbols: SymbolTable,
    pub stats: Stats,
}

pub struct Walker<'r> {
    validator: Validator<'r>,
    stats: Stats,
}

impl<'r> Walker<'r> {
    pub fn new(reporter: &'r mut ErrorReporter) -> Self {
        Walker {
            validator: Validator::new(reporter),
            stats: Stats::new(),
        }
    }

    pub fn walk_program(mut self, program: &Program) -> Analysis {
        for stmt in &program.body {
            self.walk_stmt(stmt);
        }

        self.validator.check_unused();

        Analysis {
            symbols: self.validator.into_table(),
            stats: self.stats,
        }
    }

    fn walk_stmt(&mut self, stmt: &Stmt) {
        self.stats.nodes += 1;

        match stmt {
            Stmt::Block(block) => self.walk_block(block),
            Stmt::Declaration(decl) => {
                self.stats.declarations += 1;
                self.walk_declaration(decl);
            }
            Stmt::Assignment(assignment) => {
                self.stats.assignments += 1;
                self.walk_assignment(assignment);
            }
            Stmt::If(stmt) => self.walk_if(stmt),
            Stmt::While(stmt) => self.walk_while(stmt),
            Stmt::For(stmt) => self.walk_for(stmt),
            Stmt::Function(stmt) => self.walk_function(stmt),
            Stmt::Prototype(stmt) => self.walk_prototype(stmt),
            Stmt::Return(stmt) => {
                if let Some(value) = &stmt.value {
                    self.walk_typed_expr(value);
                }
            }
        }
    }

    fn walk_block(&mut self, block: &BlockStmt) {
        for stmt in &block.body {
            self.walk_stmt(stmt);
        }
    }

    fn walk_declaration(&mut self, decl: &DeclarationStmt) {
        for declarator in &decl.declarators {
            if let Some(initializer) = &declarator.initializer {
                self.walk_expr(initializer);
            }

            self.validator.check_declaration(
                &declarator.name,
                decl.data_type,
                declarator.initializer.as_ref(),
                decl.line,
            );
        }
    }

    fn walk_assignment(&mut self, assignment: &AssignmentStmt) {
        // The target is written before the value is read
        self.validator.check_assignment(
            &assignment.target,
            assignment.operator,
            &assignment.value,
            assignment.line,
        );
        self.walk_expr(&assignment.value);
    }

    fn walk_if(&mut self, stmt: &IfStmt) {
        self.stats.ifs += 1;
        self.validator.table_mut().push_scope();

        self.walk_typed_expr(&stmt.condition);
        self.walk_stmt(&stmt.then_body);
        if let Some(else_body) = &stmt.else_body {
            self.walk_stmt(else_body);
        }

        self.validator.table_mut().pop_scope();
    }

    fn walk_while(&mut self, stmt: &WhileStmt) {
        self.stats.whiles += 1;
        self.validator.table_mut().push_scope();

        self.walk_typed_expr(&stmt.condition);
        self.walk_stmt(&stmt.body);

        self.validator.table_mut().pop_scope();
    }

    fn walk_for(&mut self, stmt: &ForStmt) {
        self.stats.fors += 1;
        self.validator.table_mut().push_scope();

        match &stmt.init {
            Some(ForInit::Declaration(decl)) => self.walk_declaration(decl),
            Some(ForInit::Assignment(assignment)) => self.walk_assignment(assignment),
            None => {}
        }

        if let Some(condition) = &stmt.condition {
            self.walk_typed_expr(condition);
        }

        match &stmt.step {
            Some(ForStep::Increment { target, line } | ForStep::Decrement { target, line }) => {
                self.validator.check_step(target, *line);
            }
            Some(ForStep::Assignment(assignment)) => self.walk_assignment(assignment),
            None => {}
        }

        self.walk_stmt(&stmt.body);

        self.validator.table_mut().pop_scope();
    }

    fn walk_function(&mut self, stmt: &FunctionStmt) {
        self.stats.functions += 1;
        self.validator.table_mut().push_scope();

        for parameter in &stmt.parameters {
            self.validator.declare_parameter(parameter, stmt.line);
        }
        self.walk_block(&stmt.body);

        // Declared after the body, in the enclosing scope
        self.validator.table_mut().pop_scope();
        self.validator.declare_function(Function {
            name: stmt.name.clone(),
            return_type: stmt.return_type,
            parameters: stmt.parameters.clone(),
            line: stmt.line,
            defined: true,
        });
    }

    fn walk_prototype(&mut self, stmt: &PrototypeStmt) {
        self.validator.declare_function(Function {
            name: stmt.name.clone(),
            return_type: stmt.return_type,
            parameters: stmt.parameters.clone(),
            line: stmt.line,
            defined: false,
        });
    }

    /// Walks an expression whose type is not checked against a target, so
    /// operator typing errors inside it still surface.
    fn walk_typed_expr(&mut self, expr: &Expression) {
        self.validator.infer_type(expr);
        self.walk_expr(expr);
    }

    fn walk_expr(&mut self, expr: &Expression) {
        self.stats.nodes += 1;

        self.walk_term(&expr.first);
        for (_, term) in &expr.rest {
            self.walk_term(term);
        }
    }

    fn walk_term(&mut self, term: &Term) {
        self.stats.nodes += 1;

        self.walk_factor(&term.first);
        for (_, factor) in &term.rest {
            self.walk_factor(factor);
        }
    }

    fn walk_factor(&mut self, factor: &Factor) {
        self.stats.nodes += 1;

        match factor {
            Factor::Number { .. } => {}
            Factor::Identifier { name, line } => {
                if !is_reserved(name) {
                    self.validator.check_use(name, *line);
                }
            }
            Factor::Call {
                name,
                arguments,
                line,
            } => {
                if !is_reserved(name) {
                    self.validator.check_use(name, *line);
                }
                for argument in arguments {
                    self.walk_typed_expr(argument);
                }
            }
            Factor::Group { inner, .. } => self.walk_expr(inner),
        }
    }
}

/// Runs the validation walk over `program`, reporting into `reporter`.
pub fn analyze(program: &Program, reporter: &mut ErrorReporter) -> Analysis {
    Walker::new(reporter).walk_program(program)
}
