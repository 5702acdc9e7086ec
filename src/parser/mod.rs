//! Combinator-based recursive descent parser.
//!
//! Parsing never recovers: the first failure that escapes every enclosing
//! choice aborts the parse, and the furthest error recorded along the way is
//! reported.

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::{ErrorKind, MAX_NESTING, ParseError, ParseResult, ParseState, Parser};

use tracing::debug;

use crate::ast::{Expression, Module};
use crate::lexer::tokenize;

/// Run `parser` over the whole remaining input.
fn parse_all<T: 'static>(state: &mut ParseState, parser: BoxedParser<T>) -> ParseResult<T> {
    (parser - eof()).parse(state).map_err(|err| {
        let err = state.take_error(err);
        debug!(%err, "parse failed");
        err
    })
}

/// Parse a complete module from the token stream
pub fn parse(state: &mut ParseState) -> ParseResult<Module> {
    parse_all(state, module())
}

/// Parse a whole source file as a module of definitions.
pub fn parse_module(source: &str) -> ParseResult<Module> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "parsing module");

    let module = parse(&mut ParseState::new(tokens))?;
    debug!(definitions = module.definitions.len(), "parsed module");
    Ok(module)
}

/// Parse a whole source string as the body of a block, without braces.
pub fn parse_block(source: &str) -> ParseResult<Expression> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "parsing block");
    parse_all(&mut ParseState::new(tokens), block())
}

/// Parse a whole source string as a single expression.
pub fn parse_expression(source: &str) -> ParseResult<Expression> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "parsing expression");
    parse_all(&mut ParseState::new(tokens), expression())
}
