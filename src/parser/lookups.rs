use std::collections::HashMap;

use crate::{
    ast::ast::Stmt,
    errors::{errors::Error, reporter::ErrorReporter},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser, &mut ErrorReporter) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations, functions and prototypes all start with a type
    parser.stmt(TokenKind::Int, parse_typed_stmt);
    parser.stmt(TokenKind::Double, parse_typed_stmt);
    parser.stmt(TokenKind::Void, parse_typed_stmt);

    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
