use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::lexer::Token;

use super::state::{ErrorKind, ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let b = other.parse(state)?;
            Ok((a, b))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let _ = other.parse(state)?;
            Ok(a)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let _ = self.parse(state)?;
            other.parse(state)
        })
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }

    /// Choice: try self, if it fails rewind and try other
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            match self.parse(state) {
                Ok(a) => Ok(a),
                Err(_) => {
                    // Error is already recorded in state by the parser
                    state.restore(pos);
                    other.parse(state)
                }
            }
        })
    }

    /// Name this parser in error messages when it fails without consuming
    /// anything.
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let start = state.position();
            let saved = state.furthest_error().cloned();
            match self.parse(state) {
                Ok(v) => Ok(v),
                Err(mut err) if err.offset() == start => {
                    // Only forget what was recorded inside if nothing got further.
                    if state.furthest_error().is_some_and(|e| e.offset() == start) {
                        state.reset_error(saved);
                    }
                    err.kind = ErrorKind::Syntactic;
                    err.expected = vec![name.to_string()];
                    state.record_error(err.clone());
                    Err(err)
                }
                Err(err) => Err(err),
            }
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Consume one token matching `predicate`, or fail naming `expected`.
pub fn token_with_error<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<Token> {
    BoxedParser::new(move |state: &mut ParseState| {
        if let Some(tok) = state.peek()
            && predicate(tok)
        {
            let tok = tok.clone();
            state.advance();
            return Ok(tok);
        }
        state.fail(ErrorKind::Structural, expected)
    })
}

pub fn expect_equals() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Equals(_)), "'='")
}

pub fn expect_left_arrow() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::LeftArrow(_)), "'<-'")
}

pub fn expect_right_arrow() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::RightArrow(_)), "'->'")
}

pub fn expect_colon() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Colon(_)), "':'")
}

pub fn expect_quote() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Quote(_)), "'''")
}

pub fn expect_minus() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Minus(_)), "'-'")
}

pub fn expect_comma() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Comma(_)), "','")
}

pub fn expect_semicolon() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Semicolon(_)), "';'")
}

pub fn expect_lparen() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::LParen(_)), "'('")
}

pub fn expect_rparen() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::RParen(_)), "')'")
}

pub fn expect_lbrace() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::LBrace(_)), "'{'")
}

pub fn expect_rbrace() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::RBrace(_)), "'}'")
}

pub fn expect_if() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::If(_)), "'if'")
}

pub fn expect_then() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Then(_)), "'then'")
}

pub fn expect_else() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Else(_)), "'else'")
}

pub fn expect_match() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::MatchKeyword(_)), "'match'")
}

pub fn expect_repeat() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Repeat(_)), "'repeat'")
}

pub fn expect_run() -> BoxedParser<Token> {
    token_with_error(|t| matches!(t, Token::Run(_)), "'run'")
}

/// Succeeds only when every token has been consumed
pub fn eof() -> BoxedParser<()> {
    BoxedParser::new(|state: &mut ParseState| {
        if state.has_next() {
            state.fail(ErrorKind::Structural, "end of input")
        } else {
            Ok(())
        }
    })
}

/// Parse zero or more occurrences
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut results = Vec::new();
        loop {
            let pos = state.position();
            match parser.parse(state) {
                Ok(item) => results.push(item),
                Err(_) => {
                    state.restore(pos);
                    break;
                }
            }
        }
        Ok(results)
    })
}

/// Parse one or more occurrences
pub fn many1<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let first = parser.parse(state)?;
        let mut rest = many(parser.clone()).parse(state)?;
        rest.insert(0, first);
        Ok(rest)
    })
}

/// Optional: parse zero or one
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        match parser.parse(state) {
            Ok(item) => Ok(Some(item)),
            Err(_) => {
                state.restore(pos);
                Ok(None)
            }
        }
    })
}

/// comma_list := [item ("," item)*]
///
/// An item is mandatory after every comma.
pub fn comma_list<T: 'static>(item: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let Some(first) = optional(item.clone()).parse(state)? else {
            return Ok(vec![]);
        };
        let mut items = vec![first];
        while optional(expect_comma()).parse(state)?.is_some() {
            items.push(item.parse(state)?);
        }
        Ok(items)
    })
}

/// semicolon_list := item (";" item)* [";"]
pub fn semicolon_list1<T: 'static>(item: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut items = vec![item.parse(state)?];
        while optional(expect_semicolon()).parse(state)?.is_some() {
            match optional(item.clone()).parse(state)? {
                Some(next) => items.push(next),
                None => break,
            }
        }
        Ok(items)
    })
}

/// parens := "(" inner ")"
pub fn parens<T: 'static>(inner: BoxedParser<T>) -> BoxedParser<T> {
    expect_lparen() * inner - expect_rparen()
}

/// braces := "{" inner "}"
pub fn braces<T: 'static>(inner: BoxedParser<T>) -> BoxedParser<T> {
    expect_lbrace() * inner - expect_rbrace()
}
