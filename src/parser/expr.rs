use crate::{
    ast::ast::{Node, NodeValue},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{ARITHMETIC_TIER, COMPARISON_TIER},
    parser::Parser,
};

/// Parses an expression from a token slice.
///
/// Comparison operators are tried before arithmetic ones. Within a tier
/// the first operator in scan order that appears anywhere wins, and the
/// slice is split at that operator's first occurrence. Repeated operators
/// therefore nest to the right: `a - b - c` is `a - (b - c)`.
pub fn parse_expr(parser: &Parser, tokens: &[Token]) -> Result<Node, Error> {
    for (kind, operator) in COMPARISON_TIER {
        if let Some(index) = tokens.iter().position(|token| token.kind == kind) {
            let (left, right) = parse_operands(parser, tokens, index)?;
            return Ok(Node::new(
                NodeValue::Comparison {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                parser.span_of(tokens),
            ));
        }
    }

    for (kind, operator) in ARITHMETIC_TIER {
        if let Some(index) = tokens.iter().position(|token| token.kind == kind) {
            let (left, right) = parse_operands(parser, tokens, index)?;
            return Ok(Node::new(
                NodeValue::Arithmetic {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                parser.span_of(tokens),
            ));
        }
    }

    parse_primary_expr(parser, tokens)
}

fn parse_operands(parser: &Parser, tokens: &[Token], index: usize) -> Result<(Node, Node), Error> {
    let (left, right) = (&tokens[..index], &tokens[index + 1..]);

    if left.is_empty() || right.is_empty() {
        return Err(Error::new(
            ErrorImpl::MissingOperand {
                expression: parser.text_of(tokens),
            },
            tokens[index].span.start.clone(),
        ));
    }

    Ok((parse_expr(parser, left)?, parse_expr(parser, right)?))
}

/// A lone integer, string literal or identifier.
pub fn parse_primary_expr(parser: &Parser, tokens: &[Token]) -> Result<Node, Error> {
    let token = match tokens {
        [token] => token,
        [] => {
            return Err(Error::new(
                ErrorImpl::MissingOperand {
                    expression: String::new(),
                },
                parser.get_position(),
            ))
        }
        [_, unexpected, ..] => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: unexpected.value.clone(),
                },
                unexpected.span.start.clone(),
            ))
        }
    };

    let value = match token.kind {
        TokenKind::Number => {
            let number = token.value.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )
            })?;
            NodeValue::Integer(number)
        }
        TokenKind::String => NodeValue::String(token.value.clone()),
        TokenKind::Identifier => NodeValue::Variable(token.value.clone()),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        }
    };

    Ok(Node::new(value, token.span.clone()))
}
