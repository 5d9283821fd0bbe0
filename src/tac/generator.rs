//! Main TAC generator.
//!
//! Holds the emitted listing and the temporary/label counters for one
//! generation pass.

use std::fmt::Write;

use crate::ast::ast::Program;

use super::{instruction::Instruction, stmt::gen_statement};

pub const PROGRAM_HEADER: &str = "# === INICIO DEL PROGRAMA ===";
pub const PROGRAM_FOOTER: &str = "# === FIN DEL PROGRAMA ===";

#[derive(Debug, Default)]
pub struct TacGenerator {
    /// Emitted instructions with their nesting depth, used only for display
    code: Vec<(usize, Instruction)>,
    temp_counter: usize,
    label_counter: usize,
    depth: usize,
}

impl TacGenerator {
    pub fn new() -> Self {
        TacGenerator::default()
    }

    /// Lowers `program`, replacing anything generated before.
    ///
    /// Numbering restarts at `t0` and `L0` on every call.
    pub fn generate(&mut self, program: &Program) -> &mut Self {
        self.code.clear();
        self.temp_counter = 0;
        self.label_counter = 0;
        self.depth = 0;

        for stmt in &program.body {
            gen_statement(self, stmt);
        }

        self
    }

    pub fn new_temp(&mut self) -> String {
        let temp = format!("t{}", self.temp_counter);
        self.temp_counter += 1;
        temp
    }

    pub fn new_label(&mut self) -> String {
        let label = format!("L{}", self.label_counter);
        self.label_counter += 1;
        label
    }

    pub fn emit(&mut self, instruction: Instruction) {
        self.code.push((self.depth, instruction));
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.code.iter().map(|(_, instruction)| instruction)
    }

    /// One unindented line per instruction.
    pub fn lines(&self) -> Vec<String> {
        self.instructions().map(|i| i.to_string()).collect()
    }

    /// The full listing: indented bodies between the program header and
    /// footer comments.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", PROGRAM_HEADER);
        for (depth, instruction) in &self.code {
            let _ = writeln!(out, "{}{}", "  ".repeat(*depth), instruction);
        }
        let _ = write!(out, "{}", PROGRAM_FOOTER);

        out
    }
}

/// Generates the TAC for `program` with a fresh generator.
pub fn generate(program: &Program) -> TacGenerator {
    let mut generator = TacGenerator::new();
    generator.generate(program);
    generator
}
