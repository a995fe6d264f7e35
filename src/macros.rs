//! Token-building macros shared by the lexer's pattern table.

/// Builds a [`Token`](crate::lexer::tokens::Token) from a kind, its text and
/// its span. `Token` must be in scope at the call site.
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Handler for an operator or punctuation pattern whose text never varies,
/// e.g. `MK_DEFAULT_HANDLER!(TokenKind::ColonEquals, ":=")`. The token's
/// value is the literal itself.
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}
