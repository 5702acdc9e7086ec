//! Pattern parsers for effy

use crate::ast::Pattern;
use crate::parser::combinators::{BoxedParser, comma_list, parens};
use crate::parser::state::{ParseState, Parser};

use super::literal::ident;

/// constructor := ident "(" [pattern ("," pattern)*] ")"
fn constructor() -> BoxedParser<Pattern> {
    (ident() + parens(comma_list(pattern())))
        >> |(name, subpatterns)| Pattern::Constructor(name, subpatterns)
}

/// pattern := constructor | ident
///
/// Both start with an identifier; the constructor form is tried first and
/// rewinds when no argument list follows.
pub fn pattern() -> BoxedParser<Pattern> {
    BoxedParser::new(|state: &mut ParseState| {
        let variable = ident() >> Pattern::Identifier;
        state.nested(|state| (constructor() | variable).label("pattern").parse(state))
    })
}
