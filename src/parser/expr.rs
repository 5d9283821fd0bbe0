use crate::{
    ast::expressions::{BinaryOp, Expression, Factor, Term},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `term (('+'|'-') term)*`
pub fn parse_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let first = parse_term(parser)?;
    let mut rest = vec![];

    while let Some(operator) = BinaryOp::additive(parser.current_token_kind()) {
        parser.advance();
        rest.push((operator, parse_term(parser)?));
    }

    Ok(Expression { first, rest })
}

/// `factor (('*'|'/'|'%') factor)* (relop factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<Term, Error> {
    let first = parse_factor(parser)?;
    let mut rest = vec![];

    while let Some(operator) = BinaryOp::multiplicative(parser.current_token_kind()) {
        parser.advance();
        rest.push((operator, parse_factor(parser)?));
    }

    while let Some(operator) = BinaryOp::relational(parser.current_token_kind()) {
        parser.advance();
        rest.push((operator, parse_factor(parser)?));
    }

    Ok(Term { first, rest })
}

pub fn parse_factor(parser: &mut Parser) -> Result<Factor, Error> {
    let line = parser.current_token().line;

    match parser.current_token_kind() {
        TokenKind::Number => Ok(Factor::Number {
            text: parser.advance().value,
            line,
        }),
        TokenKind::Identifier => {
            let name = parser.advance().value;

            if parser.current_token_kind() == TokenKind::OpenParen {
                parser.advance();
                let arguments = parse_arguments(parser)?;
                parser.expect(TokenKind::CloseParen)?;

                Ok(Factor::Call {
                    name,
                    arguments,
                    line,
                })
            } else {
                Ok(Factor::Identifier { name, line })
            }
        }
        TokenKind::OpenParen => {
            parser.advance();
            let inner = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Factor::Group {
                inner: Box::new(inner),
                line,
            })
        }
        _ => Err(parser.mismatched("{NUMERO, ID, '('}")),
    }
}

fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expression>, Error> {
    let mut arguments = vec![];

    if parser.current_token_kind() == TokenKind::CloseParen {
        return Ok(arguments);
    }

    arguments.push(parse_expr(parser)?);
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        arguments.push(parse_expr(parser)?);
    }

    Ok(arguments)
}
