use lachs::Span;
use thiserror::Error;

use crate::lexer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input no token rule matches
    Lexical,
    /// A named construct could not be parsed at all
    Syntactic,
    /// A specific required token was missing
    Structural,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", render(.message, .expected, .found, .position))]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub expected: Vec<String>,
    pub found: Option<String>,
    pub position: Option<Span>,
    /// Token index the error was raised at; deeper errors win.
    offset: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            message: msg.into(),
            expected: vec![],
            found: None,
            position: None,
            offset: 0,
        }
    }

    pub fn lexical(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lexical, msg)
    }

    pub fn expected(mut self, what: impl Into<String>) -> Self {
        self.expected.push(what.into());
        self
    }

    pub fn found(mut self, what: impl Into<String>) -> Self {
        self.found = Some(what.into());
        self
    }

    pub fn at(mut self, position: Span) -> Self {
        self.position = Some(position);
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Fold another error raised at the same offset into this one. An error
    /// that expects nothing is final and absorbs nothing.
    fn absorb(&mut self, other: ParseError) {
        if self.expected.is_empty() {
            return;
        }
        for what in other.expected {
            if !self.expected.contains(&what) {
                self.expected.push(what);
            }
        }
        if other.kind == ErrorKind::Syntactic {
            self.kind = ErrorKind::Syntactic;
        }
    }
}

fn render(
    message: &str,
    expected: &[String],
    found: &Option<String>,
    position: &Option<Span>,
) -> String {
    let mut msg = message.to_string();
    if let Some(found) = found {
        msg.push_str(&format!(": found {found}"));
    }
    match expected {
        [] => {}
        [single] => msg.push_str(&format!(", expected {single}")),
        [init @ .., last] => msg.push_str(&format!(
            ", expected one of {} or {last}",
            init.join(", ")
        )),
    }

    match position {
        Some(span) if !span.source.is_empty() => span.to_string(&msg),
        _ => format!("Parse error: {msg}"),
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// How many expressions, blocks, patterns and types may enclose one another
/// before parsing gives up.
pub const MAX_NESTING: usize = 32;

/// Cursor over a token buffer plus the furthest failure seen so far.
pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    depth: usize,
    furthest: Option<ParseError>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
            furthest: None,
        }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    /// Build an error located at the current token.
    pub fn error_here(&self, kind: ErrorKind, expected: &str) -> ParseError {
        let mut err = match self.peek() {
            Some(tok) => ParseError::new(kind, "unexpected token")
                .found(tok.describe())
                .at(tok.pos()),
            None => ParseError::new(kind, "unexpected end of input"),
        };
        err.offset = self.index;
        err.expected(expected)
    }

    /// Remember `err` if it got at least as far as anything seen so far.
    pub fn record_error(&mut self, err: ParseError) {
        if let Some(furthest) = &mut self.furthest {
            if furthest.offset > err.offset {
                return;
            }
            if furthest.offset == err.offset && !err.expected.is_empty() {
                furthest.absorb(err);
                return;
            }
        }
        self.furthest = Some(err);
    }

    /// Record an error at the current token and return it.
    pub fn fail<T>(&mut self, kind: ErrorKind, expected: &str) -> ParseResult<T> {
        let err = self.error_here(kind, expected);
        self.record_error(err.clone());
        Err(err)
    }

    /// Run `parse` one nesting level deeper, failing instead once
    /// [`MAX_NESTING`] levels are open.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            let mut err = ParseError::new(ErrorKind::Syntactic, "nesting too deep");
            if let Some(tok) = self.peek() {
                err = err.found(tok.describe()).at(tok.pos());
            }
            err.offset = self.index;
            self.record_error(err.clone());
            return Err(err);
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub fn furthest_error(&self) -> Option<&ParseError> {
        self.furthest.as_ref()
    }

    /// Put back a furthest error saved before an attempt, dropping whatever
    /// the attempt recorded.
    pub fn reset_error(&mut self, saved: Option<ParseError>) {
        self.furthest = saved;
    }

    /// The error to surface for a failed parse: the furthest one recorded,
    /// falling back to `err` when nothing deeper was seen.
    pub fn take_error(&mut self, err: ParseError) -> ParseError {
        match self.furthest.take() {
            Some(furthest) if furthest.offset >= err.offset => furthest,
            _ => err,
        }
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}
