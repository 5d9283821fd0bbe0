use crate::ast::{
    ast::Stmt,
    expressions::BinaryOp,
    statements::{
        AssignOp, AssignmentStmt, DeclarationStmt, ForInit, ForStep, ForStmt, FunctionStmt,
        IfStmt, WhileStmt,
    },
};

use super::{expr::gen_expression, generator::TacGenerator, instruction::Instruction};

pub fn gen_statement(generator: &mut TacGenerator, stmt: &Stmt) {
    match stmt {
        Stmt::Block(block) => {
            for stmt in &block.body {
                gen_statement(generator, stmt);
            }
        }
        Stmt::Declaration(decl) => gen_declaration(generator, decl),
        Stmt::Assignment(assignment) => gen_assignment(generator, assignment),
        Stmt::If(stmt) => gen_if(generator, stmt),
        Stmt::While(stmt) => gen_while(generator, stmt),
        Stmt::For(stmt) => gen_for(generator, stmt),
        Stmt::Function(stmt) => gen_function(generator, stmt),
        // Signatures only
        Stmt::Prototype(_) => {}
        Stmt::Return(stmt) => {
            let value = stmt
                .value
                .as_ref()
                .map(|value| gen_expression(generator, value));
            generator.emit(Instruction::Return(value));
        }
    }
}

fn gen_declaration(generator: &mut TacGenerator, decl: &DeclarationStmt) {
    for declarator in &decl.declarators {
        match &declarator.initializer {
            Some(initializer) => {
                let value = gen_expression(generator, initializer);
                generator.emit(Instruction::Copy {
                    target: declarator.name.clone(),
                    value,
                });
            }
            None => generator.emit(Instruction::Declare(declarator.name.clone())),
        }
    }
}

fn gen_assignment(generator: &mut TacGenerator, assignment: &AssignmentStmt) {
    let value = gen_expression(generator, &assignment.value);
    gen_store(generator, &assignment.target, assignment.operator, value);
}

/// `x = v`, or `t = x op v; x = t` for compound operators.
fn gen_store(generator: &mut TacGenerator, target: &str, operator: AssignOp, value: String) {
    let value = match operator.binary() {
        None => value,
        Some(binary) => gen_update(generator, target, binary, value),
    };

    generator.emit(Instruction::Copy {
        target: target.to_string(),
        value,
    });
}

fn gen_update(
    generator: &mut TacGenerator,
    target: &str,
    operator: BinaryOp,
    value: String,
) -> String {
    let temp = generator.new_temp();
    generator.emit(Instruction::Binary {
        target: temp.clone(),
        left: target.to_string(),
        operator,
        right: value,
    });
    temp
}

fn gen_if(generator: &mut TacGenerator, stmt: &IfStmt) {
    match &stmt.else_body {
        None => {
            let end_label = generator.new_label();

            let condition = gen_expression(generator, &stmt.condition);
            generator.emit(Instruction::IfNotGoto {
                condition,
                label: end_label.clone(),
            });

            generator.indent();
            gen_statement(generator, &stmt.then_body);
            generator.dedent();

            generator.emit(Instruction::Label(end_label));
        }
        Some(else_body) => {
            let else_label = generator.new_label();
            let end_label = generator.new_label();

            let condition = gen_expression(generator, &stmt.condition);
            generator.emit(Instruction::IfNotGoto {
                condition,
                label: else_label.clone(),
            });

            generator.indent();
            gen_statement(generator, &stmt.then_body);
            generator.emit(Instruction::Goto(end_label.clone()));
            generator.dedent();

            generator.emit(Instruction::Label(else_label));

            generator.indent();
            gen_statement(generator, else_body);
            generator.dedent();

            generator.emit(Instruction::Label(end_label));
        }
    }
}

fn gen_while(generator: &mut TacGenerator, stmt: &WhileStmt) {
    let start_label = generator.new_label();
    let end_label = generator.new_label();

    generator.emit(Instruction::Label(start_label.clone()));
    generator.indent();

    let condition = gen_expression(generator, &stmt.condition);
    generator.emit(Instruction::IfNotGoto {
        condition,
        label: end_label.clone(),
    });

    gen_statement(generator, &stmt.body);
    generator.emit(Instruction::Goto(start_label));

    generator.dedent();
    generator.emit(Instruction::Label(end_label));
}

fn gen_for(generator: &mut TacGenerator, stmt: &ForStmt) {
    let start_label = generator.new_label();
    let end_label = generator.new_label();

    match &stmt.init {
        Some(ForInit::Declaration(decl)) => gen_declaration(generator, decl),
        Some(ForInit::Assignment(assignment)) => gen_assignment(generator, assignment),
        None => {}
    }

    generator.emit(Instruction::Label(start_label.clone()));
    generator.indent();

    if let Some(condition) = &stmt.condition {
        let condition = gen_expression(generator, condition);
        generator.emit(Instruction::IfNotGoto {
            condition,
            label: end_label.clone(),
        });
    }

    gen_statement(generator, &stmt.body);

    match &stmt.step {
        Some(ForStep::Increment { target, .. }) => {
            gen_store(generator, target, AssignOp::Add, String::from("1"))
        }
        Some(ForStep::Decrement { target, .. }) => {
            gen_store(generator, target, AssignOp::Sub, String::from("1"))
        }
        Some(ForStep::Assignment(assignment)) => gen_assignment(generator, assignment),
        None => {}
    }

    generator.emit(Instruction::Goto(start_label));

    generator.dedent();
    generator.emit(Instruction::Label(end_label));
}

fn gen_function(generator: &mut TacGenerator, stmt: &FunctionStmt) {
    generator.emit(Instruction::Label(stmt.name.clone()));

    generator.indent();
    for stmt in &stmt.body.body {
        gen_statement(generator, stmt);
    }
    generator.dedent();
}
