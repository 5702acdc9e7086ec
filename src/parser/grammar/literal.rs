//! Identifier and numeric literal parsers

use lachs::Span;

use crate::lexer::Token;
use crate::parser::combinators::{BoxedParser, expect_minus, optional};
use crate::parser::state::{ErrorKind, ParseState, Parser};

/// Parse an identifier together with its span
pub fn ident_token() -> BoxedParser<(String, Span)> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(Token::Ident(id)) => {
            let ident = (id.value.clone(), id.position.clone());
            state.advance();
            Ok(ident)
        }
        _ => state.fail(ErrorKind::Structural, "identifier"),
    })
}

/// Parse an identifier
pub fn ident() -> BoxedParser<String> {
    ident_token() >> |(name, _)| name
}

/// number := ["-"] digits ["." digits]
///
/// The sign only belongs to the numeral when nothing separates them, so
/// `- 3` is not a literal.
pub fn number() -> BoxedParser<f64> {
    BoxedParser::new(|state: &mut ParseState| {
        let start = state.position();
        let sign = optional(expect_minus()).parse(state)?.map(|minus| minus.pos().end);
        let value = match state.peek() {
            Some(Token::Number(num)) if sign.is_none_or(|end| end == num.position.start) => {
                num.value.parse::<f64>().ok()
            }
            _ => None,
        };
        match value {
            Some(value) => {
                state.advance();
                Ok(if sign.is_some() { -value } else { value })
            }
            None => {
                state.restore(start);
                state.fail(ErrorKind::Structural, "number")
            }
        }
    })
}
