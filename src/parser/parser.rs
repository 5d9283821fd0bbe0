//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry point.
//! Statements are dispatched through a lookup table keyed by the first
//! token of the statement; expressions are parsed by one function per
//! grammar layer.
//!
//! A statement that fails to parse is reported through the syntax error
//! listener and the parser skips ahead to the next statement boundary, so a
//! single run reports every syntax error it can find. A missing `;` at the
//! end of an otherwise complete statement is reported without dropping it.

use std::collections::HashMap;

use crate::{
    ast::{ast::Program, ast::Stmt},
    errors::{
        errors::{Error, ErrorImpl},
        reporter::ErrorReporter,
    },
    lexer::tokens::{Token, TokenKind},
};

use super::{
    listener::report_syntax_error,
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when the stream does not already end
    /// with one, so lookahead never runs off the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map(|t| t.line).unwrap_or(1);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("<EOF>"),
                line,
            });
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token `n` positions ahead, clamped to `EOF`.
    pub fn peek(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.missing(expected_kind)),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Expects the `;` closing a statement.
    ///
    /// When it is missing but the statement plainly ended (the next token
    /// opens a statement, closes a block or sits on a later line) the error
    /// is reported and the `;` is treated as present, so the parsed
    /// statement and the one after it both survive.
    pub fn expect_semicolon(&mut self, reporter: &mut ErrorReporter) -> Result<(), Error> {
        if self.current_token_kind() == TokenKind::Semicolon {
            self.advance();
            return Ok(());
        }

        let error = self.missing(TokenKind::Semicolon);
        let token = self.current_token();
        let previous_line = match self.pos {
            0 => token.line,
            pos => self.tokens[pos - 1].line,
        };

        let ended = matches!(token.kind, TokenKind::CloseCurly | TokenKind::EOF)
            || self.stmt_lookup.contains_key(&token.kind)
            || token.line > previous_line;

        if !ended {
            return Err(error);
        }

        report_syntax_error(reporter, error.get_line(), &error.get_message());
        Ok(())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Builds a syntax error located at the current token.
    pub fn error(&self, message: String) -> Error {
        Error::new(ErrorImpl::Syntax { message }, self.current_token().line)
    }

    pub fn missing(&self, expected: TokenKind) -> Error {
        let token = self.current_token();
        match expected {
            TokenKind::Semicolon
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::CloseCurly => self.error(format!(
                "missing {} at '{}'",
                expected.literal(),
                token.value
            )),
            _ => self.mismatched(expected.literal()),
        }
    }

    pub fn mismatched(&self, expecting: &str) -> Error {
        self.error(format!(
            "mismatched input '{}' expecting {}",
            self.current_token().value,
            expecting
        ))
    }

    /// Skips ahead to the end of the statement that failed to parse.
    ///
    /// Stops after a `;`, or before a `}` so the enclosing block can close.
    /// Always consumes at least one token when nothing was consumed since
    /// `start`.
    pub fn synchronize(&mut self, start: usize) {
        loop {
            match self.current_token_kind() {
                TokenKind::EOF => break,
                TokenKind::Semicolon => {
                    self.advance();
                    break;
                }
                TokenKind::CloseCurly => {
                    if self.pos == start {
                        self.advance();
                    }
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}

/// Parses statements until `terminator` (or `EOF`), recovering from errors.
pub fn parse_statements(
    parser: &mut Parser,
    reporter: &mut ErrorReporter,
    terminator: Option<TokenKind>,
) -> Vec<Stmt> {
    let mut body = vec![];

    while parser.has_tokens() && Some(parser.current_token_kind()) != terminator {
        let start = parser.position();
        match parse_stmt(parser, reporter) {
            Ok(stmt) => body.push(stmt),
            Err(error) => {
                report_syntax_error(reporter, error.get_line(), &error.get_message());
                parser.synchronize(start);
            }
        }
    }

    body
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. Syntax errors are classified
/// and reported into `reporter`; the returned tree holds every statement
/// that parsed successfully.
pub fn parse(tokens: Vec<Token>, reporter: &mut ErrorReporter) -> Program {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let body = parse_statements(&mut parser, reporter, None);

    Program { body }
}
