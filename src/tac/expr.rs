use crate::ast::expressions::{Expression, Factor, Term};

use super::{generator::TacGenerator, instruction::Instruction};

/// Emits the code for `expr` and returns the operand holding its value.
pub fn gen_expression(generator: &mut TacGenerator, expr: &Expression) -> String {
    let mut result = gen_term(generator, &expr.first);

    for (operator, term) in &expr.rest {
        let right = gen_term(generator, term);
        let target = generator.new_temp();

        generator.emit(Instruction::Binary {
            target: target.clone(),
            left: result,
            operator: *operator,
            right,
        });
        result = target;
    }

    result
}

fn gen_term(generator: &mut TacGenerator, term: &Term) -> String {
    let mut result = gen_factor(generator, &term.first);

    for (operator, factor) in &term.rest {
        let right = gen_factor(generator, factor);
        let target = generator.new_temp();

        generator.emit(Instruction::Binary {
            target: target.clone(),
            left: result,
            operator: *operator,
            right,
        });
        result = target;
    }

    result
}

fn gen_factor(generator: &mut TacGenerator, factor: &Factor) -> String {
    match factor {
        Factor::Number { text, .. } => text.clone(),
        Factor::Identifier { name, .. } => name.clone(),
        Factor::Group { inner, .. } => gen_expression(generator, inner),
        Factor::Call {
            name, arguments, ..
        } => {
            // Every argument is evaluated before the first `param`
            let values: Vec<String> = arguments
                .iter()
                .map(|argument| gen_expression(generator, argument))
                .collect();

            for value in values {
                generator.emit(Instruction::Param(value));
            }

            let target = generator.new_temp();
            generator.emit(Instruction::Call {
                target: target.clone(),
                function: name.clone(),
            });
            target
        }
    }
}
