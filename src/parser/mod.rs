//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Statements are dispatched on their first
//! token through a lookup table; expressions are parsed one grammar layer
//! at a time. It handles:
//!
//! - Statement parsing (declarations, functions, prototypes, control flow)
//! - Expression parsing (additive, multiplicative/relational, factors)
//! - Error recovery and reporting through the syntax error listener

pub mod expr;
pub mod listener;
pub mod lookups;
pub mod parser;
pub mod stmt;
