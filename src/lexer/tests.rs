//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and decimals)
//! - Operators and punctuation
//! - Comments and line tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string())
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = kinds("int double void if else while for return");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Int,
            TokenKind::Double,
            TokenKind::Void,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_1 _tmp integer".to_string()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_1");
    assert_eq!(tokens[2].value, "_tmp");
    // A keyword prefix does not make a keyword
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "integer");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0".to_string()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0");
}

#[test]
fn test_tokenize_compound_operators() {
    let tokens = kinds("+= -= *= /= %= ++ -- == != <= >= = < >");

    assert_eq!(
        tokens,
        vec![
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = kinds("{ } ( ) ; , + - * / %");

    assert_eq!(
        tokens,
        vec![
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = kinds("x // trailing\n/* block\n comment */ y");

    assert_eq!(tokens, vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EOF]);
}

#[test]
fn test_tokenize_tracks_lines() {
    let tokens = tokenize("int a;\n\nint b;\n/* x\n y */ a = 1;".to_string()).unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[3].line, 3);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[6].line, 5);
    assert_eq!(tokens[6].value, "a");
}

#[test]
fn test_tokenize_statement() {
    let tokens = kinds("x = 1 + 2 * 3;");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("int a;\na = 1 # 2;".to_string());

    let error = result.unwrap_err();
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.get_message(), "token recognition error at: '#'");
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}
