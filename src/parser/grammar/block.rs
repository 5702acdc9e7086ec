//! Block and statement parsers for effy
//!
//! A block body is a chain of elements: bindings and `;`-separated
//! expressions nest to the right, so `a = 1; b <- f(a); g(b)` becomes
//! `LetBind(a, 1, EffectBind(b, f(a), g(b)))`. The chain is read in a loop
//! and folded afterwards, so long blocks do not deepen the parse.

use crate::ast::{Expression, MatchClause};
use crate::lexer::Token;

use crate::parser::combinators::{
    BoxedParser, braces, expect_equals, expect_left_arrow, expect_match, expect_repeat,
    expect_right_arrow, expect_run, expect_semicolon, optional, parens, semicolon_list1,
};
use crate::parser::state::{ParseResult, ParseState, Parser};

use super::expression::expression;
use super::literal::ident;
use super::pattern::pattern;

/// A block element that scopes over the rest of the block.
enum Step {
    Let(String, Expression),
    Bind(String, Expression),
    Then(Expression),
}

impl Step {
    fn wrap(self, rest: Expression) -> Expression {
        match self {
            Step::Let(name, value) => Expression::LetBind {
                name,
                value: Box::new(value),
                body: Box::new(rest),
            },
            Step::Bind(name, value) => Expression::EffectBind {
                name,
                value: Box::new(value),
                body: Box::new(rest),
            },
            Step::Then(first) => Expression::Compound {
                first: Box::new(first),
                rest: Box::new(rest),
            },
        }
    }
}

enum Element {
    /// Followed by `;`, so the rest of the block is required
    Step(Step),
    /// A statement form without `;`; the rest of the block may follow
    Open(Expression),
    /// An expression without `;`, the value of the block
    Last(Expression),
}

/// binding := ident arrow expression ";"
///
/// Fails without committing unless `arrow` follows the name, so that plain
/// expressions starting with an identifier fall through.
fn binding(arrow: BoxedParser<Token>) -> BoxedParser<(String, Expression)> {
    (ident() - arrow) + (expression() - expect_semicolon())
}

/// let_bind := ident "=" expression ";"
fn let_bind() -> BoxedParser<Step> {
    binding(expect_equals()) >> |(name, value)| Step::Let(name, value)
}

/// effect_bind := ident "<-" expression ";"
fn effect_bind() -> BoxedParser<Step> {
    binding(expect_left_arrow()) >> |(name, value)| Step::Bind(name, value)
}

/// repeat := "repeat" "(" expression ")" "{" block "}"
fn repeat_form() -> BoxedParser<Expression> {
    ((expect_repeat() * parens(expression())) + braces(block()))
        >> |(count, body)| Expression::Repeat {
            count: Box::new(count),
            body: Box::new(body),
        }
}

/// run := "run" "{" block "}"
fn run_form() -> BoxedParser<Expression> {
    (expect_run() * braces(block())) >> |body| Expression::Run(Box::new(body))
}

/// match_clause := pattern "->" expression
fn match_clause() -> BoxedParser<MatchClause> {
    ((pattern() - expect_right_arrow()) + expression())
        >> |(pattern, body)| MatchClause { pattern, body }
}

/// match := "match" expression "{" match_clause (";" match_clause)* [";"] "}"
fn match_form() -> BoxedParser<Expression> {
    ((expect_match() * expression()) + braces(semicolon_list1(match_clause())))
        >> |(scrutinee, clauses)| Expression::Match {
            scrutinee: Box::new(scrutinee),
            clauses,
        }
}

/// statement_form := repeat | run | match
pub fn statement_form() -> BoxedParser<Expression> {
    repeat_form() | run_form() | match_form()
}

/// element := let_bind | effect_bind
///          | statement_form [";"]
///          | expression [";"]
fn element() -> BoxedParser<Element> {
    BoxedParser::new(|state: &mut ParseState| {
        let pos = state.position();

        if let Ok(step) = (let_bind() | effect_bind()).parse(state) {
            return Ok(Element::Step(step));
        }
        state.restore(pos);

        // Statement forms end in a brace, so the separator is optional
        if let Ok(form) = statement_form().parse(state) {
            return Ok(match optional(expect_semicolon()).parse(state)? {
                Some(_) => Element::Step(Step::Then(form)),
                None => Element::Open(form),
            });
        }
        state.restore(pos);

        let value = expression().parse(state)?;
        Ok(match optional(expect_semicolon()).parse(state)? {
            Some(_) => Element::Step(Step::Then(value)),
            None => Element::Last(value),
        })
    })
}

fn fold(steps: Vec<Step>, last: Expression) -> Expression {
    steps.into_iter().rev().fold(last, |rest, step| step.wrap(rest))
}

/// block := element*, ending in a value or an open statement form
fn block_body(state: &mut ParseState) -> ParseResult<Expression> {
    let mut steps = Vec::new();
    // Where to end the block if what follows the latest open statement form
    // does not parse: the position after it and the number of steps so far.
    let mut open: Option<(usize, usize)> = None;

    loop {
        let element = match element().parse(state) {
            Ok(element) => element,
            Err(err) => {
                let Some((pos, len)) = open else {
                    return Err(err);
                };
                state.restore(pos);
                steps.truncate(len);
                let Some(Step::Then(last)) = steps.pop() else {
                    return Err(err);
                };
                return Ok(fold(steps, last));
            }
        };

        match element {
            Element::Step(step) => steps.push(step),
            Element::Open(form) => {
                steps.push(Step::Then(form));
                open = Some((state.position(), steps.len()));
            }
            Element::Last(value) => return Ok(fold(steps, value)),
        }
    }
}

/// block := element*, one nesting level deeper
pub fn block() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| state.nested(block_body))
}
