#![allow(clippy::module_inception)]

use crate::{
    ast::ast::Program,
    errors::reporter::ErrorReporter,
    lexer::{lexer::tokenize, tokens::Token},
    parser::{listener::report_syntax_error, parser::parse},
    semantic::{stats::Stats, walker::analyze},
    symbols::symbol_table::SymbolTable,
    tac::generator::{generate, TacGenerator},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod semantic;
pub mod symbols;
pub mod tac;

extern crate regex;

/// Everything produced for one source unit.
#[derive(Debug)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub diagnostics: ErrorReporter,
    pub symbols: SymbolTable,
    pub stats: Stats,
    /// Only present when no diagnostic was reported.
    pub tac: Option<TacGenerator>,
}

impl Compilation {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Tokenizes `source`, reporting a lexical failure as a syntax error.
///
/// On failure the returned stream is empty, which parses as an empty
/// program.
pub fn lex(source: &str, reporter: &mut ErrorReporter) -> Vec<Token> {
    match tokenize(source.to_string()) {
        Ok(tokens) => tokens,
        Err(error) => {
            report_syntax_error(reporter, error.get_line(), &error.get_message());
            vec![]
        }
    }
}

/// Runs the whole pipeline: tokenize, parse, validate and, when the
/// program is clean, generate three-address code.
pub fn compile(source: &str) -> Compilation {
    let mut reporter = ErrorReporter::new();

    let tokens = lex(source, &mut reporter);
    let program = parse(tokens.clone(), &mut reporter);
    let analysis = analyze(&program, &mut reporter);

    let tac = if reporter.has_errors() {
        None
    } else {
        Some(generate(&program))
    };

    Compilation {
        tokens,
        program,
        diagnostics: reporter,
        symbols: analysis.symbols,
        stats: analysis.stats,
        tac,
    }
}

/// The 1-based `line` of `source`, without its line terminator.
pub fn source_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .lines()
        .nth(line - 1)
        .map(|text| text.trim_end_matches('\r'))
}
