//! Error types and error reporting for the compiler.
//!
//! This module defines the diagnostics produced while compiling a source
//! unit. It includes:
//!
//! - Error payloads carrying the fixed user-facing messages
//! - A located error wrapper with kind (syntactic or semantic) and line
//! - The reporter that accumulates diagnostics in discovery order

pub mod errors;
pub mod reporter;

#[cfg(test)]
mod tests;
