//! Grammar module for the effy language
//!
//! This module contains all the parsing rules organized by category:
//! - `literal`: identifiers and numeric literals
//! - `operators`: the operator precedence table
//! - `expression`: atoms, application, operators, if-then-else
//! - `block`: bindings, statement forms and sequencing inside `{ ... }`
//! - `pattern`: match clause patterns
//! - `types`: parameter type annotations and effects
//!
//! This file holds the declaration level: parameters, definitions and
//! whole modules.

mod block;
mod expression;
mod literal;
mod operators;
mod pattern;
mod types;

pub use block::{block, statement_form};
pub use expression::{application, atom, expression, formula, if_then_else};
pub use literal::{ident, number};
pub use operators::{Fixity, OPERATOR_TABLE, Tier, is_operator};
pub use pattern::pattern;
pub use types::{effect, simple_type, ty};

use tracing::trace;

use crate::ast::{Definition, Module, Parameter};

use super::combinators::{
    BoxedParser, comma_list, expect_colon, expect_lbrace, expect_rbrace, many, optional, parens,
};
use super::state::{ParseState, Parser};

use literal::ident_token;

/// parameter := ident [":" ty]
pub fn parameter() -> BoxedParser<Parameter> {
    (ident() + optional(expect_colon() * ty()))
        >> |(name, ty)| Parameter {
            name,
            ty: ty.unwrap_or_default(),
        }
}

/// definition := ident "(" [parameter ("," parameter)*] ")" "{" block "}"
pub fn definition() -> BoxedParser<Definition> {
    BoxedParser::new(|state: &mut ParseState| {
        let (name, start) = ident_token().label("definition").parse(state)?;
        let parameters = parens(comma_list(parameter())).parse(state)?;
        expect_lbrace().parse(state)?;
        let body = block().parse(state)?;
        let end = expect_rbrace().parse(state)?.pos();

        trace!(definition = %name, parameters = parameters.len(), "parsed definition");

        Ok(Definition {
            name,
            parameters,
            body,
            position: start.merge(&end),
        })
    })
}

/// module := definition*
pub fn module() -> BoxedParser<Module> {
    many(definition()) >> |definitions| Module { definitions }
}
