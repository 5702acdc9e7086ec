//! Type annotation parsers for effy

use crate::ast::{Effect, Type};
use crate::lexer::Token;
use crate::parser::combinators::{BoxedParser, comma_list, expect_quote, expect_right_arrow, parens};
use crate::parser::state::{ParseState, Parser};

use super::literal::ident;

/// effect := ["pure" | "partial" | "divergent" | "total"]
pub fn effect() -> BoxedParser<Effect> {
    BoxedParser::new(|state: &mut ParseState| {
        let effect = match state.peek() {
            Some(Token::Pure(_)) => Effect::Pure,
            Some(Token::Partial(_)) => Effect::Partial,
            Some(Token::Divergent(_)) => Effect::Divergent,
            Some(Token::Total(_)) => Effect::Total,
            _ => return Ok(Effect::Inferred),
        };
        state.advance();
        Ok(effect)
    })
}

/// simple_type := "'" ident | ident
pub fn simple_type() -> BoxedParser<Type> {
    let variable = (expect_quote() * ident()) >> Type::Variable;
    let named = ident() >> Type::Named;
    variable | named
}

/// function_type := ("(" [ty ("," ty)*] ")" | simple_type) "->" effect ty
fn function_type() -> BoxedParser<Type> {
    let arguments = parens(comma_list(ty())) | (simple_type() >> |arg| vec![arg]);
    ((arguments - expect_right_arrow()) + effect() + ty())
        >> |((arguments, effect), result)| Type::function(arguments, effect, result)
}

/// ty := function_type | simple_type
pub fn ty() -> BoxedParser<Type> {
    BoxedParser::new(|state: &mut ParseState| {
        state.nested(|state| (function_type() | simple_type()).label("type").parse(state))
    })
}
