//! Scoped symbol table.
//!
//! This module holds the records the semantic pass keeps about every
//! declared name:
//!
//! - Variables with their type and their initialized/used lifecycle
//! - Functions (definitions and prototypes) with their signature
//! - A strict stack of scopes, searched innermost to outermost

pub mod symbol;
pub mod symbol_table;

#[cfg(test)]
mod tests;
