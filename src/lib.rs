//! # effy - front end for a small effect-annotated functional language
//!
//! This crate turns effy source text into an abstract syntax tree. It stops
//! there: evaluation, type checking and effect checking belong to whoever
//! consumes the tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream (comments blanked, lachs tokens with spans)
//!     ↓
//! [Parser] → AST (ast::Module / ast::Expression)
//! ```
//!
//! ## The Language
//!
//! ```text
//! // definitions take parenthesized parameters and a braced body
//! apply_twice(f: 'a -> pure 'a, x) {
//!     y = f(x);
//!     f(y)
//! }
//!
//! main() {
//!     line <- read(0);
//!     run { print(line) }
//!     repeat(3) { tick() }
//!     match parse(line) {
//!         some(n) -> n * 2;
//!         none -> 0;
//!     }
//! }
//! ```
//!
//! - `name = expr;` binds a value, `name <- expr;` binds the result of an
//!   effectful computation, both scoped over the rest of the block.
//! - `repeat`, `run` and `match` are statement forms and need no `;` before
//!   the next element of a block.
//! - Operators desugar to applications of their own name: `a + b` parses as
//!   `Application(Variable("+"), [a, b])`.
//! - Function types carry an optional effect: `pure`, `partial`,
//!   `divergent` or `total`.
//!
//! ## Module Structure
//!
//! - [`ast`] - the tree handed to an evaluator
//! - [`lexer`] - tokenization using lachs
//! - [`parser`] - parsing using combinator-based grammar
//!
//! ## Getting Started
//!
//! ```no_run
//! let module = effy::parse_module("square(x) { x * x }").unwrap();
//! assert_eq!(module.definitions[0].name, "square");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use parser::{ParseError, parse_block, parse_expression, parse_module};
