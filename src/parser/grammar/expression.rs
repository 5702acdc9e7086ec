//! Expression parsers for effy

use crate::ast::Expression;
use crate::lexer::Token;

use crate::parser::combinators::{
    BoxedParser, braces, comma_list, expect_else, expect_if, expect_then, many, optional, parens,
};
use crate::parser::state::{ErrorKind, ParseState, Parser};

use super::block::block;
use super::literal::{ident, number};
use super::operators::{Fixity, OPERATOR_TABLE};

/// atom := ident | number | "(" expression ")" | "{" block "}"
pub fn atom() -> BoxedParser<Expression> {
    let variable = ident() >> Expression::Variable;
    let literal = number() >> Expression::NumericLiteral;
    let grouped = parens(expression());
    let nested = braces(block());

    (variable | literal | grouped | nested).label("atom")
}

/// application := atom ("(" [expression ("," expression)*] ")")*
pub fn application() -> BoxedParser<Expression> {
    (atom() + many(parens(comma_list(expression()))))
        >> |(head, calls)| calls.into_iter().fold(head, Expression::apply)
}

/// Consume one operator token whose symbol is in `symbols`.
fn operator(symbols: &'static [&'static str]) -> BoxedParser<&'static str> {
    BoxedParser::new(move |state: &mut ParseState| {
        let symbol = state
            .peek()
            .and_then(Token::operator_symbol)
            .filter(|symbol| symbols.contains(symbol));
        match symbol {
            Some(symbol) => {
                state.advance();
                Ok(symbol)
            }
            None => state.fail(ErrorKind::Structural, &format!("'{}'", symbols.join("' or '"))),
        }
    })
}

/// Parse operands of the `level` tightest tiers of the operator table.
///
/// tier(0) := application
/// tier(n) := prefix_op* tier(n - 1)                   for prefix tiers
///          | tier(n - 1) (infix_op tier(n - 1))*      for left-associative tiers
fn tier(level: usize) -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let Some(current) = level.checked_sub(1).map(|i| OPERATOR_TABLE[i]) else {
            return application().parse(state);
        };

        match current.fixity {
            Fixity::Prefix => {
                let ops = many(operator(current.operators)).parse(state)?;
                let operand = tier(level - 1).parse(state)?;
                Ok(ops
                    .into_iter()
                    .rev()
                    .fold(operand, |operand, op| Expression::prefix(op, operand)))
            }
            Fixity::InfixLeft => {
                let mut left = tier(level - 1).parse(state)?;
                while let Some(op) = optional(operator(current.operators)).parse(state)? {
                    let right = tier(level - 1).parse(state)?;
                    left = Expression::binary(op, left, right);
                }
                Ok(left)
            }
        }
    })
}

/// formula := the full operator table over applications
pub fn formula() -> BoxedParser<Expression> {
    tier(OPERATOR_TABLE.len()).label("formula")
}

/// if_then_else := "if" expression "then" expression "else" expression
pub fn if_then_else() -> BoxedParser<Expression> {
    ((expect_if() * expression()) + (expect_then() * expression()) + (expect_else() * expression()))
        >> |((condition, consequent), alternate)| Expression::IfThenElse {
            condition: Box::new(condition),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
}

/// expression := if_then_else | formula
pub fn expression() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        state.nested(|state| (if_then_else() | formula()).parse(state))
    })
}
