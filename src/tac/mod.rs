//! Three-address code generation module.
//!
//! This module lowers a syntactically valid program into a flat listing of
//! three-address instructions. It handles:
//!
//! - Linearization of expressions into temporaries `t0, t1, ...`
//! - Control flow lowering for `if`, `while` and `for` with labels `L0, L1, ...`
//! - Compound assignment desugaring and loop steps
//! - Function entry labels, call arguments and returns
//!
//! Generation never looks at diagnostics; callers decide whether to run it.

pub mod expr;
pub mod generator;
pub mod instruction;
pub mod stmt;

#[cfg(test)]
mod tests;
