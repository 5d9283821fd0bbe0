use crate::{
    ast::{
        ast::Stmt,
        statements::{
            AssignOp, AssignmentStmt, BlockStmt, DeclarationStmt, Declarator, ForInit, ForStep,
            ForStmt, FunctionStmt, IfStmt, Parameter, PrototypeStmt, ReturnStmt, WhileStmt,
        },
        types::DataType,
    },
    errors::{errors::Error, reporter::ErrorReporter},
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    parser::{parse_statements, Parser},
};

pub fn parse_stmt(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();

    match parser.get_stmt_lookup().get(&kind).copied() {
        Some(handler) => handler(parser, reporter),
        None => Err(parser.error(format!(
            "extraneous input '{}' expecting {{'int', 'double', 'void', ID, 'if', 'while', 'for', 'return', '{{'}}",
            parser.current_token().value
        ))),
    }
}

fn parse_data_type(parser: &mut Parser) -> Result<DataType, Error> {
    match DataType::from_token(parser.current_token_kind()) {
        Some(data_type) => {
            parser.advance();
            Ok(data_type)
        }
        None => Err(parser.mismatched("{'int', 'double', 'void'}")),
    }
}

/// Everything that starts with a type: a declaration, a function definition
/// or a prototype. One token of lookahead past the name decides which.
pub fn parse_typed_stmt(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<Stmt, Error> {
    if parser.peek(1).kind == TokenKind::Identifier && parser.peek(2).kind == TokenKind::OpenParen
    {
        return parse_function_stmt(parser, reporter);
    }

    let declaration = parse_declaration(parser)?;
    parser.expect_semicolon(reporter)?;

    Ok(Stmt::Declaration(declaration))
}

/// `type ID ('=' expr)? (',' ID ('=' expr)?)*` without the trailing `;`.
fn parse_declaration(parser: &mut Parser) -> Result<DeclarationStmt, Error> {
    let line = parser.current_token().line;

    if parser.current_token_kind() == TokenKind::Void {
        return Err(parser.error(format!(
            "no viable alternative at input 'void{}'",
            parser.peek(1).value
        )));
    }
    let data_type = parse_data_type(parser)?;

    let mut declarators = vec![parse_declarator(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        declarators.push(parse_declarator(parser)?);
    }

    Ok(DeclarationStmt {
        data_type,
        declarators,
        line,
    })
}

fn parse_declarator(parser: &mut Parser) -> Result<Declarator, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;

    let initializer = if parser.current_token_kind() == TokenKind::Assignment {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    Ok(Declarator { name, initializer })
}

fn parse_function_stmt(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<Stmt, Error> {
    let line = parser.current_token().line;
    let return_type = parse_data_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;
    let parameters = parse_parameters(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        return Ok(Stmt::Prototype(PrototypeStmt {
            return_type,
            name,
            parameters,
            line,
        }));
    }

    let body = parse_block(parser, reporter)?;

    Ok(Stmt::Function(FunctionStmt {
        return_type,
        name,
        parameters,
        body,
        line,
    }))
}

fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    let mut parameters = vec![];

    if parser.current_token_kind() == TokenKind::CloseParen {
        return Ok(parameters);
    }

    loop {
        let data_type = parse_data_type(parser)?;
        let name = parser.expect(TokenKind::Identifier)?.value;
        parameters.push(Parameter { name, data_type });

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    Ok(parameters)
}

/// `ID op expr` without the trailing `;`.
fn parse_assignment(parser: &mut Parser) -> Result<AssignmentStmt, Error> {
    let line = parser.current_token().line;
    let target = parser.expect(TokenKind::Identifier)?.value;

    let operator = match AssignOp::from_token(parser.current_token_kind()) {
        Some(operator) => operator,
        None => {
            return Err(parser.error(format!(
                "no viable alternative at input '{}{}'",
                target,
                parser.current_token().value
            )))
        }
    };
    parser.advance();

    let value = parse_expr(parser)?;

    Ok(AssignmentStmt {
        target,
        operator,
        value,
        line,
    })
}

pub fn parse_assignment_stmt(
    parser: &mut Parser,
    reporter: &mut ErrorReporter,
) -> Result<Stmt, Error> {
    let assignment = parse_assignment(parser)?;
    parser.expect_semicolon(reporter)?;

    Ok(Stmt::Assignment(assignment))
}

pub fn parse_if_stmt(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<Stmt, Error> {
    let line = parser.advance().line;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = Box::new(parse_stmt(parser, reporter)?);

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser, reporter)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        line,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<Stmt, Error> {
    let line = parser.advance().line;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = Box::new(parse_stmt(parser, reporter)?);

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        line,
    }))
}

pub fn parse_for_stmt(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<Stmt, Error> {
    let line = parser.advance().line;
    parser.expect(TokenKind::OpenParen)?;

    let init = match parser.current_token_kind() {
        TokenKind::Semicolon => None,
        kind if kind.is_type() => Some(ForInit::Declaration(parse_declaration(parser)?)),
        _ => Some(ForInit::Assignment(parse_assignment(parser)?)),
    };
    parser.expect(TokenKind::Semicolon)?;

    let condition = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect(TokenKind::Semicolon)?;

    let step = if parser.current_token_kind() == TokenKind::CloseParen {
        None
    } else {
        Some(parse_for_step(parser)?)
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = Box::new(parse_stmt(parser, reporter)?);

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        step,
        body,
        line,
    }))
}

fn parse_for_step(parser: &mut Parser) -> Result<ForStep, Error> {
    let line = parser.current_token().line;

    match parser.peek(1).kind {
        TokenKind::PlusPlus => {
            let target = parser.expect(TokenKind::Identifier)?.value;
            parser.advance();
            Ok(ForStep::Increment { target, line })
        }
        TokenKind::MinusMinus => {
            let target = parser.expect(TokenKind::Identifier)?.value;
            parser.advance();
            Ok(ForStep::Decrement { target, line })
        }
        _ => Ok(ForStep::Assignment(parse_assignment(parser)?)),
    }
}

fn parse_block(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<BlockStmt, Error> {
    let line = parser.expect(TokenKind::OpenCurly)?.line;

    let body = parse_statements(parser, reporter, Some(TokenKind::CloseCurly));

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt { body, line })
}

pub fn parse_block_stmt(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser, reporter)?))
}

pub fn parse_return_stmt(parser: &mut Parser, reporter: &mut ErrorReporter) -> Result<Stmt, Error> {
    let line = parser.advance().line;

    let value = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_expr(parser)?)
    };
    parser.expect_semicolon(reporter)?;

    Ok(Stmt::Return(ReturnStmt { value, line }))
}
