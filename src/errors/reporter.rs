//! Accumulator for every diagnostic found while compiling one source unit.
//!
//! The reporter is created by the caller and passed by `&mut` into each
//! stage, so independent compilations never share state.

use std::fmt::Write;

use super::errors::{Error, ErrorImpl, ErrorKind};

#[derive(Debug, Default, Clone)]
pub struct ErrorReporter {
    diagnostics: Vec<Error>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter {
            diagnostics: vec![],
        }
    }

    pub fn report(&mut self, error: Error) {
        self.diagnostics.push(error);
    }

    pub fn report_syntactic(&mut self, line: usize, message: impl Into<String>) {
        self.report(Error::new(
            ErrorImpl::Syntax {
                message: message.into(),
            },
            line,
        ));
    }

    pub fn report_semantic(&mut self, line: usize, error: ErrorImpl) {
        self.report(Error::new(error, line));
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// All diagnostics, in the order they were discovered.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn syntactic(&self) -> impl Iterator<Item = &Error> {
        self.of_kind(ErrorKind::Syntactic)
    }

    pub fn semantic(&self) -> impl Iterator<Item = &Error> {
        self.of_kind(ErrorKind::Semantic)
    }

    fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &Error> {
        self.diagnostics.iter().filter(move |e| e.get_kind() == kind)
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Renders the detailed error report: totals, then syntactic and
    /// semantic diagnostics as separate sections.
    pub fn summary(&self) -> String {
        let rule = "=".repeat(60);
        let thin = "-".repeat(60);
        let syntactic: Vec<&Error> = self.syntactic().collect();
        let semantic: Vec<&Error> = self.semantic().collect();

        let mut out = String::new();
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "         REPORTE DE ERRORES");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Total de errores: {}", self.error_count());
        let _ = writeln!(out, "  • Errores sintácticos: {}", syntactic.len());
        let _ = writeln!(out, "  • Errores semánticos: {}", semantic.len());
        let _ = writeln!(out, "{}", rule);

        if !syntactic.is_empty() {
            let _ = writeln!(out, "\nERRORES SINTÁCTICOS:");
            let _ = writeln!(out, "{}", thin);
            for error in syntactic {
                let _ = writeln!(out, "  {}", error);
            }
        }

        if !semantic.is_empty() {
            let _ = writeln!(out, "\nERRORES SEMÁNTICOS:");
            let _ = writeln!(out, "{}", thin);
            for error in semantic {
                let _ = writeln!(out, "  {}", error);
            }
        }

        let _ = write!(out, "\n{}", rule);
        out
    }
}
