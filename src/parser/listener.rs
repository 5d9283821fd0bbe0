//! Syntax error listener.
//!
//! Receives raw parser messages (`missing ';' at 'x'`, `mismatched input
//! ...`) and turns them into the short user-facing text that is reported as
//! a syntactic diagnostic.

use crate::errors::reporter::ErrorReporter;

/// Maps a raw parser message to its user-facing form.
///
/// Messages that match no known shape are returned unchanged.
pub fn classify(raw: &str) -> String {
    if raw.contains("mismatched input") {
        String::from("Token inesperado o falta de un símbolo esperado")
    } else if raw.contains("missing") {
        if raw.contains("';'") {
            String::from("Falta un punto y coma (;)")
        } else if raw.contains("'('") {
            String::from("Falta un paréntesis de apertura '('")
        } else if raw.contains("')'") {
            String::from("Falta un paréntesis de cierre ')'")
        } else {
            let rest = raw.split_once("missing").map(|(_, rest)| rest).unwrap_or("");
            format!("Falta: {}", rest.trim())
        }
    } else if raw.contains("extraneous input") {
        String::from("Símbolo adicional no esperado")
    } else if raw.contains("no viable alternative") {
        String::from("Sintaxis incorrecta")
    } else {
        raw.to_string()
    }
}

pub fn report_syntax_error(reporter: &mut ErrorReporter, line: usize, raw: &str) {
    reporter.report_syntactic(line, classify(raw));
}
