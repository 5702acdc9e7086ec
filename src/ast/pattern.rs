//! # Pattern Matching AST Nodes
//!
//! Patterns appear on the left of `->` in a `match` clause:
//!
//! ```text
//! match xs {
//!     cons(x, rest) -> x;
//!     nil -> 0
//! }
//! ```
//!
//! A bare identifier either binds the scrutinee or names a nullary
//! constructor; telling the two apart is left to the evaluator.

use super::expression::Expression;

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// A bare name, e.g. `x` or `nil`
    Identifier(String),
    /// A constructor applied to sub-patterns, e.g. `cons(x, xs)`
    Constructor(String, Vec<Pattern>),
}

impl Pattern {
    pub fn ident(name: impl Into<String>) -> Self {
        Pattern::Identifier(name.into())
    }

    pub fn constructor(name: impl Into<String>, subpatterns: Vec<Pattern>) -> Self {
        Pattern::Constructor(name.into(), subpatterns)
    }
}

/// A single `pattern -> body` arm of a match expression.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchClause {
    pub pattern: Pattern,
    pub body: Expression,
}
