//! Semantic analysis module.
//!
//! This module checks a parsed program against the language rules while
//! walking it once:
//!
//! - Declarations, double declarations and shadowing across scopes
//! - Initialization before use and unused variables
//! - Operator typing with `int` to `double` promotion
//! - Assignment and initializer type compatibility
//!
//! Findings are reported into the caller's `ErrorReporter`; the walk always
//! runs to completion.

pub mod stats;
pub mod validator;
pub mod walker;
