//! Unit tests for three-address code generation.

use crate::{
    ast::ast::Program, errors::reporter::ErrorReporter, lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::generator::{generate, TacGenerator};

fn program(source: &str) -> Program {
    let tokens = tokenize(source.to_string()).unwrap();
    let mut reporter = ErrorReporter::new();
    let program = parse(tokens, &mut reporter);
    assert!(!reporter.has_errors(), "unexpected syntax errors");

    program
}

fn tac(source: &str) -> Vec<String> {
    generate(&program(source)).lines()
}

#[test]
fn test_precedence_chain() {
    assert_eq!(
        tac("x = 1 + 2 * 3;"),
        vec!["t0 = 2 * 3", "t1 = 1 + t0", "x = t1"]
    );
}

#[test]
fn test_group_is_evaluated_first() {
    assert_eq!(
        tac("x = (a + b) * c;"),
        vec!["t0 = a + b", "t1 = t0 * c", "x = t1"]
    );
}

#[test]
fn test_relational_result_in_temporary() {
    assert_eq!(tac("x = a < b;"), vec!["t0 = a < b", "x = t0"]);
}

#[test]
fn test_declarations() {
    assert_eq!(
        tac("int a = 1, b, c = a + 2;"),
        vec!["a = 1", "DECLARE b", "t0 = a + 2", "c = t0"]
    );
}

#[test]
fn test_compound_assignment() {
    assert_eq!(
        tac("x -= y * 2;"),
        vec!["t0 = y * 2", "t1 = x - t0", "x = t1"]
    );
}

#[test]
fn test_call_arguments() {
    assert_eq!(
        tac("r = f(a + 1, 2);"),
        vec!["t0 = a + 1", "param t0", "param 2", "t1 = call f", "r = t1"]
    );
}

#[test]
fn test_if_without_else() {
    assert_eq!(
        tac("if (a) b = 1;"),
        vec!["if not a goto L0", "b = 1", "L0:"]
    );
}

#[test]
fn test_if_else() {
    assert_eq!(
        tac("if (a > 1) b = 1; else b = 2;"),
        vec![
            "t0 = a > 1",
            "if not t0 goto L0",
            "b = 1",
            "goto L1",
            "L0:",
            "b = 2",
            "L1:",
        ]
    );
}

#[test]
fn test_while_loop() {
    let lines = tac("while (x < 10) x = x + 1;");

    assert_eq!(
        lines,
        vec![
            "L0:",
            "t0 = x < 10",
            "if not t0 goto L1",
            "t1 = x + 1",
            "x = t1",
            "goto L0",
            "L1:",
        ]
    );

    let labels = lines.iter().filter(|l| l.ends_with(':')).count();
    let jumps = lines.iter().filter(|l| l.starts_with("if not")).count();
    assert_eq!(labels, 2);
    assert_eq!(jumps, 1);
}

#[test]
fn test_for_loop() {
    assert_eq!(
        tac("for (i = 0; i < 5; i++) x = i;"),
        vec![
            "i = 0",
            "L0:",
            "t0 = i < 5",
            "if not t0 goto L1",
            "x = i",
            "t1 = i + 1",
            "i = t1",
            "goto L0",
            "L1:",
        ]
    );
}

#[test]
fn test_for_loop_without_condition() {
    assert_eq!(
        tac("for (;; i--) { }"),
        vec!["L0:", "t0 = i - 1", "i = t0", "goto L0", "L1:"]
    );
}

#[test]
fn test_function_and_prototype() {
    assert_eq!(
        tac("int sq(int n);\nint sq(int n) { return n * n; }"),
        vec!["sq:", "t0 = n * n", "return t0"]
    );
}

#[test]
fn test_counters_reset_per_run() {
    let program = program("while (a) a = a - 1;\nx = 1 + 2;");
    let mut generator = TacGenerator::new();

    let first = generator.generate(&program).lines();
    let second = generator.generate(&program).lines();

    assert_eq!(first, second);
    assert_eq!(first.first().map(String::as_str), Some("L0:"));
}

#[test]
fn test_render_indents_bodies() {
    let generator = generate(&program("while (a) a = 0;"));

    assert_eq!(
        generator.render(),
        "# === INICIO DEL PROGRAMA ===\nL0:\n  if not a goto L1\n  a = 0\n  goto L0\nL1:\n# === FIN DEL PROGRAMA ==="
    );
}
