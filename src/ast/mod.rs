//! # effy Abstract Syntax Tree
//!
//! The tree produced by the parser and handed to an evaluator. Every node owns
//! its children outright; nothing is shared and nothing is mutated after
//! parsing.
//!
//! ```text
//! Module
//!  └── Definition (name, parameters, body)
//!       ├── Parameter (name, Type)
//!       └── Expression
//!            ├── Application / IfThenElse / LetBind / EffectBind / ...
//!            └── Match ── MatchClause (Pattern, Expression)
//! ```
//!
//! Operators do not get their own node kind: `a + b` is an [`Expression::Application`]
//! of `Variable("+")` to `[a, b]`. See [`crate::parser::is_operator`] for the
//! names an evaluator should treat as primitives.

use lachs::Span;

pub mod expression;
pub mod pattern;
pub mod types;

pub use expression::Expression;
pub use pattern::{MatchClause, Pattern};
pub use types::{Effect, Type};

/// An ordered sequence of definitions, as written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub definitions: Vec<Definition>,
}

impl Module {
    /// Look up the first definition with the given name.
    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|def| def.name == name)
    }
}

/// A named top-level function: `name(params) { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Expression,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
