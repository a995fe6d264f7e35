use crate::{
    ast::ast::{Node, NodeValue},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::parse_expr,
    Span,
};

use super::parser::Parser;

/// Parses the statement at the cursor, which runs to the end of the
/// instruction.
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.unknown_instruction()),
    }
}

/// `IDENT := EXPR`
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let error = parser.unknown_instruction();
    if parser.peek_kind(1) != TokenKind::ColonEquals {
        return Err(error);
    }

    let target = parser.advance().clone();
    parser.advance();

    let value_tokens = parser.remaining().to_vec();
    if value_tokens.is_empty() {
        return Err(error);
    }

    let value = parse_expr(parser, &value_tokens)?;
    parser.finish();

    let span = Span {
        start: target.span.start,
        end: value.span.end.clone(),
    };

    Ok(Node::new(
        NodeValue::Assignment {
            target: target.value,
            value: Box::new(value),
        },
        span,
    ))
}

/// Splits `KEYWORD COND SEPARATOR STMT` at the first separator and parses
/// both halves.
fn parse_conditional(parser: &mut Parser, separator: TokenKind) -> Result<(Node, Node, Span), Error> {
    let error = parser.unknown_instruction();
    let start = parser.advance().span.start.clone();

    let separator_index = parser
        .remaining()
        .iter()
        .position(|token| token.kind == separator)
        .ok_or_else(|| error.clone())?;

    let condition_tokens = parser.remaining()[..separator_index].to_vec();
    if condition_tokens.is_empty() || separator_index + 1 == parser.remaining().len() {
        return Err(error);
    }

    let condition = parse_expr(parser, &condition_tokens)?;

    parser.seek(parser.pos() + separator_index + 1);
    let body = parse_stmt(parser)?;

    let span = Span {
        start,
        end: body.span.end.clone(),
    };

    Ok((condition, body, span))
}

/// `IF COND THEN STMT`. An `ELSE` is never attached here; it is its own
/// instruction.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let (condition, then_branch, span) = parse_conditional(parser, TokenKind::Then)?;

    Ok(Node::new(
        NodeValue::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
        },
        span,
    ))
}

/// `WHILE COND DO STMT`
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let (condition, body, span) = parse_conditional(parser, TokenKind::Do)?;

    Ok(Node::new(
        NodeValue::While {
            condition: Box::new(condition),
            body: Box::new(body),
        },
        span,
    ))
}

/// `ELSE STMT`
pub fn parse_else_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let error = parser.unknown_instruction();
    let start = parser.advance().span.start.clone();

    if !parser.has_tokens() {
        return Err(error);
    }

    let body = parse_stmt(parser)?;
    let span = Span {
        start,
        end: body.span.end.clone(),
    };

    Ok(Node::new(NodeValue::Else { body: Box::new(body) }, span))
}

/// `WRITELN(EXPR, EXPR, ...)`
pub fn parse_write_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let error = parser.unknown_instruction();
    let span = parser.span_of(parser.remaining());
    parser.advance();

    let remaining = parser.remaining().to_vec();
    let inner = match remaining.as_slice() {
        [open, inner @ .., close]
            if open.kind == TokenKind::OpenParen
                && close.kind == TokenKind::CloseParen
                && !inner.is_empty() =>
        {
            inner
        }
        _ => return Err(error),
    };

    let arguments = inner
        .split(|token| token.kind == TokenKind::Comma)
        .map(|argument| parse_expr(parser, argument))
        .collect::<Result<Vec<Node>, Error>>()?;
    parser.finish();

    Ok(Node::new(NodeValue::Write { arguments }, span))
}
