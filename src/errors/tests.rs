//! Unit tests for error handling.
//!
//! This module contains tests for error payloads, messages and the reporter.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::errors::reporter::ErrorReporter;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: "x".to_string(),
        },
        3,
    );

    assert_eq!(error.get_error_name(), "UndeclaredVariable");
    assert_eq!(error.get_line(), 3);
    assert_eq!(error.get_kind(), ErrorKind::Semantic);
}

#[test]
fn test_fixed_messages() {
    let undeclared = ErrorImpl::UndeclaredVariable { variable: "x".to_string() };
    let uninit = ErrorImpl::UseBeforeInit { variable: "y".to_string() };
    let double = ErrorImpl::DoubleDeclaration { variable: "z".to_string() };
    let unused = ErrorImpl::UnusedVariable { variable: "w".to_string() };

    assert_eq!(undeclared.to_string(), "Variable 'x' no ha sido declarada");
    assert_eq!(uninit.to_string(), "Variable 'y' usada sin inicializar");
    assert_eq!(double.to_string(), "Variable 'z' ya fue declarada en este contexto");
    assert_eq!(unused.to_string(), "Variable 'w' declarada pero no usada");
}

#[test]
fn test_incompatible_type_context_prefix() {
    let bare = ErrorImpl::IncompatibleType {
        expected: "int".to_string(),
        actual: "double".to_string(),
        context: String::new(),
    };
    let with_context = ErrorImpl::IncompatibleType {
        expected: "int".to_string(),
        actual: "double".to_string(),
        context: "Asignación a 'x'".to_string(),
    };

    assert_eq!(
        bare.to_string(),
        "Tipo incompatible: se intenta asignar 'double' a variable de tipo 'int'"
    );
    assert_eq!(
        with_context.to_string(),
        "Asignación a 'x': Tipo incompatible: se intenta asignar 'double' a variable de tipo 'int'"
    );
}

#[test]
fn test_syntax_error_kind_and_display() {
    let error = Error::new(
        ErrorImpl::Syntax {
            message: "Falta un punto y coma (;)".to_string(),
        },
        7,
    );

    assert_eq!(error.get_kind(), ErrorKind::Syntactic);
    assert_eq!(error.to_string(), "[SINTÁCTICO] Línea 7: Falta un punto y coma (;)");
}

#[test]
fn test_semantic_display() {
    let error = Error::new(ErrorImpl::UnusedVariable { variable: "a".to_string() }, 1);
    assert_eq!(error.to_string(), "[SEMÁNTICO] Línea 1: Variable 'a' declarada pero no usada");
}

#[test]
fn test_error_tip() {
    let error = Error::new(ErrorImpl::UseBeforeInit { variable: "a".to_string() }, 1);
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));

    let error = Error::new(
        ErrorImpl::IncompatibleComparison {
            left: "int".to_string(),
            right: "void".to_string(),
        },
        1,
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_reporter_accumulates_in_order() {
    let mut reporter = ErrorReporter::new();
    assert!(!reporter.has_errors());

    reporter.report_semantic(4, ErrorImpl::UndeclaredVariable { variable: "a".to_string() });
    reporter.report_syntactic(2, "Sintaxis incorrecta");
    reporter.report_semantic(4, ErrorImpl::UndeclaredVariable { variable: "a".to_string() });

    assert!(reporter.has_errors());
    assert_eq!(reporter.error_count(), 3);

    let lines: Vec<usize> = reporter.diagnostics().iter().map(|e| e.get_line()).collect();
    assert_eq!(lines, vec![4, 2, 4]);

    // Identical violations are never merged
    assert_eq!(reporter.diagnostics()[0], reporter.diagnostics()[2]);
    assert_eq!(reporter.syntactic().count(), 1);
    assert_eq!(reporter.semantic().count(), 2);
}

#[test]
fn test_reporter_summary() {
    let mut reporter = ErrorReporter::new();
    reporter.report_syntactic(1, "Falta un punto y coma (;)");
    reporter.report_semantic(5, ErrorImpl::UseBeforeInit { variable: "b".to_string() });

    let summary = reporter.summary();
    assert!(summary.contains("Total de errores: 2"));
    assert!(summary.contains("Errores sintácticos: 1"));
    assert!(summary.contains("Errores semánticos: 1"));
    assert!(summary.contains("[SINTÁCTICO] Línea 1: Falta un punto y coma (;)"));
    assert!(summary.contains("[SEMÁNTICO] Línea 5: Variable 'b' usada sin inicializar"));
    assert!(summary.find("ERRORES SINTÁCTICOS").unwrap() < summary.find("ERRORES SEMÁNTICOS").unwrap());
}

#[test]
fn test_reporter_clear() {
    let mut reporter = ErrorReporter::new();
    reporter.report_syntactic(1, "Sintaxis incorrecta");
    reporter.clear();
    assert_eq!(reporter.error_count(), 0);
}
