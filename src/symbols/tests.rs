//! Unit tests for the symbol table.

use crate::ast::{statements::Parameter, types::DataType};

use super::{
    symbol::{Function, Symbol, Variable},
    symbol_table::SymbolTable,
};

fn variable(name: &str, line: usize) -> Symbol {
    Symbol::Variable(Variable::new(name, DataType::Int, line))
}

#[test]
fn test_global_scope_is_open() {
    let table = SymbolTable::new();

    assert_eq!(table.depth(), 1);
    assert!(table.resolve("x").is_none());
}

#[test]
fn test_declare_rejects_duplicate_in_same_scope() {
    let mut table = SymbolTable::new();

    assert!(table.declare(variable("x", 1)));
    assert!(!table.declare(variable("x", 2)));

    // The first record is left untouched
    assert_eq!(table.resolve("x").unwrap().line(), 1);
}

#[test]
fn test_shadowing_resolves_innermost() {
    let mut table = SymbolTable::new();
    table.declare(variable("x", 1));

    table.push_scope();
    assert!(table.declare(Symbol::Variable(Variable::new(
        "x",
        DataType::Double,
        4
    ))));
    assert_eq!(table.resolve("x").unwrap().data_type(), DataType::Double);

    table.pop_scope();
    assert_eq!(table.resolve("x").unwrap().data_type(), DataType::Int);
}

#[test]
fn test_lookup_current_ignores_outer_scopes() {
    let mut table = SymbolTable::new();
    table.declare(variable("x", 1));
    table.push_scope();

    assert!(table.lookup_current("x").is_none());
    assert!(table.resolve("x").is_some());
}

#[test]
fn test_pop_returns_closed_scope() {
    let mut table = SymbolTable::new();
    table.push_scope();
    table.declare(variable("a", 2));
    table.declare(variable("b", 3));

    let scope = table.pop_scope().unwrap();
    let names: Vec<&str> = scope.iter().map(|s| s.name()).collect();

    assert_eq!(names, vec!["a", "b"]);
    assert!(table.resolve("a").is_none());
    assert_eq!(table.depth(), 1);
}

#[test]
fn test_pop_with_nothing_open() {
    let mut table = SymbolTable::new();

    assert!(table.pop_scope().is_some());
    assert!(table.pop_scope().is_none());
    assert!(!table.declare(variable("x", 1)));
}

#[test]
fn test_initialization_keeps_first_line() {
    let mut table = SymbolTable::new();
    table.declare(variable("x", 1));

    let symbol = table.resolve_mut("x").unwrap();
    assert!(!symbol.is_initialized());
    symbol.initialize(3);
    symbol.initialize(7);

    let variable = table.resolve("x").unwrap().as_variable().unwrap();
    assert_eq!(variable.initialized_at, Some(3));
}

#[test]
fn test_functions_count_as_initialized() {
    let function = Symbol::Function(Function {
        name: "f".to_string(),
        return_type: DataType::Double,
        parameters: vec![Parameter {
            name: "a".to_string(),
            data_type: DataType::Int,
        }],
        line: 1,
        defined: true,
    });

    assert!(function.is_initialized());
    assert_eq!(function.data_type(), DataType::Double);
    assert_eq!(function.to_string(), "función f(int a) -> double (línea 1)");
}

#[test]
fn test_display_lists_scopes() {
    let mut table = SymbolTable::new();
    table.declare(Symbol::Variable(
        Variable::new("x", DataType::Int, 1).initialized(1),
    ));
    table.resolve_mut("x").unwrap().mark_used();

    assert_eq!(
        table.to_string(),
        "Contexto 0 (1 símbolos)\n  variable x : int (línea 1) inicializada en línea 1, usada\n"
    );
}
