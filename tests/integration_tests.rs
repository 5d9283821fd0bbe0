//! Integration tests for end-to-end compilation.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization, parsing, semantic analysis and
//! three-address code generation.

use tacc::{compile, errors::errors::ErrorKind};

fn tac_lines(source: &str) -> Vec<String> {
    let compilation = compile(source);
    assert!(
        !compilation.has_errors(),
        "unexpected diagnostics: {:?}",
        compilation.diagnostics.diagnostics()
    );

    compilation.tac.expect("clean programs generate code").lines()
}

#[test]
fn test_compile_control_flow() {
    let source = r#"
int x = 10;
if (x > 5) {
    x = x + 1;
} else {
    x = x - 1;
}
int y = x;
y = y;
"#;

    assert_eq!(
        tac_lines(source),
        vec![
            "x = 10",
            "t0 = x > 5",
            "if not t0 goto L0",
            "t1 = x + 1",
            "x = t1",
            "goto L1",
            "L0:",
            "t2 = x - 1",
            "x = t2",
            "L1:",
            "y = x",
            "y = y",
        ]
    );
}

#[test]
fn test_compile_function() {
    let source = r#"
int sq(int n) {
    return n * n;
}
int r = sq(4);
r = r + 1;
int z = r;
z = z;
"#;

    assert_eq!(
        tac_lines(source),
        vec![
            "sq:",
            "t0 = n * n",
            "return t0",
            "param 4",
            "t1 = call sq",
            "r = t1",
            "t2 = r + 1",
            "r = t2",
            "z = r",
            "z = z",
        ]
    );
}

#[test]
fn test_compile_loops() {
    let source = r#"
/* sum of the first numbers */
int total = 0;
for (int i = 0; i < 10; i++) {
    total += i;
}
while (total > 100) total -= 1; // clamp
int out = total;
out = out;
"#;

    let compilation = compile(source);
    assert!(!compilation.has_errors());
    assert_eq!(compilation.stats.fors, 1);
    assert_eq!(compilation.stats.whiles, 1);
    assert_eq!(compilation.stats.loops(), 2);

    let tac = compilation.tac.unwrap();
    let render = tac.render();
    assert!(render.starts_with("# === INICIO DEL PROGRAMA ==="));
    assert!(render.ends_with("# === FIN DEL PROGRAMA ==="));
    assert!(render.contains("\n  t1 = total + i\n"));

    let lines = tac.lines();
    assert_eq!(lines.iter().filter(|l| l.starts_with("goto")).count(), 2);
    assert_eq!(lines.iter().filter(|l| l.starts_with("if not")).count(), 2);
}

#[test]
fn test_syntax_errors_suppress_code() {
    let compilation = compile("int a = 1\nint b = 2;\nx = 3\n");

    assert!(compilation.tac.is_none());
    assert_eq!(compilation.diagnostics.syntactic().count(), 2);
}

#[test]
fn test_semantic_errors_suppress_code() {
    let compilation = compile("int a;\nint b = a;\nb = b;");

    assert!(compilation.tac.is_none());
    let names: Vec<&str> = compilation
        .diagnostics
        .diagnostics()
        .iter()
        .map(|e| e.get_error_name())
        .collect();
    assert_eq!(names, vec!["UseBeforeInit", "UnusedVariable"]);
}

#[test]
fn test_mixed_diagnostics_and_summary() {
    let compilation = compile("int a = 1\nint b;\nc = 2;");
    let diagnostics = compilation.diagnostics.diagnostics();

    assert_eq!(diagnostics.len(), 4);
    assert_eq!(diagnostics[0].get_kind(), ErrorKind::Syntactic);
    assert_eq!(
        diagnostics[0].to_string(),
        "[SINTÁCTICO] Línea 2: Falta un punto y coma (;)"
    );
    assert_eq!(diagnostics[1].get_kind(), ErrorKind::Semantic);
    assert_eq!(
        diagnostics[1].to_string(),
        "[SEMÁNTICO] Línea 3: Variable 'c' no ha sido declarada"
    );
    assert_eq!(diagnostics[2].get_error_name(), "UnusedVariable");
    assert_eq!(diagnostics[2].get_line(), 1);
    assert_eq!(diagnostics[3].get_error_name(), "UnusedVariable");
    assert_eq!(diagnostics[3].get_line(), 2);

    let summary = compilation.diagnostics.summary();
    assert!(summary.contains("Total de errores: 4"));
    assert!(summary.contains("Errores sintácticos: 1"));
    assert!(summary.contains("Errores semánticos: 3"));
}

#[test]
fn test_no_false_undeclared_reports() {
    let source = r#"
double scale(double v, int k);
double scale(double v, int k) {
    double r = v * k;
    return r;
}
int n = 3;
double acc = 0;
for (int i = 0; i < n; i++) {
    acc = acc + scale(1.5, i);
}
if (acc >= 10) acc = 10; else acc = acc / 2;
"#;

    let compilation = compile(source);

    assert_eq!(
        compilation
            .diagnostics
            .diagnostics()
            .iter()
            .filter(|e| e.get_error_name() == "UndeclaredVariable")
            .count(),
        0
    );
}

#[test]
fn test_global_symbols_after_compilation() {
    let compilation = compile("int f(int a) { return a; }\nint x = f(1);\nx = x;");

    assert!(!compilation.has_errors());
    assert!(compilation.symbols.resolve("f").is_some());
    assert!(compilation.symbols.resolve("x").is_some());
    assert!(compilation.symbols.resolve("a").is_none());
}

#[test]
fn test_generation_is_repeatable() {
    let source = "int a = 1;\nwhile (a < 3) a = a + 1;\nint b = a;\nb = b;";

    assert_eq!(tac_lines(source), tac_lines(source));
}

#[test]
fn test_missing_semicolon_keeps_declarations() {
    let compilation = compile("int a = 1\nint b = 2;\nb = a;\na = b;");
    let diagnostics = compilation.diagnostics.diagnostics();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "[SINTÁCTICO] Línea 2: Falta un punto y coma (;)"
    );
    assert!(compilation.symbols.resolve("a").is_some());
    assert!(compilation.symbols.resolve("b").is_some());
    assert!(compilation.tac.is_none());
}

#[test]
fn test_mixed_numeric_comparison_is_silent() {
    let source = r#"
int i = 0;
double limit = 2.5;
while (i < 2.5) i = i + 1;
if (limit >= i) limit = limit / 2;
"#;

    let lines = tac_lines(source);

    assert!(lines.contains(&"t0 = i < 2.5".to_string()));
    assert!(lines.iter().any(|l| l.ends_with("= limit >= i")));
}
