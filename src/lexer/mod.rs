//! Tokenizer for effy source text.
//!
//! Tokens are produced by `lachs`; comments are blanked out beforehand so
//! that every span still points at the original source.

use lachs::Span;

use crate::parser::ParseError;

#[lachs::token]
pub enum Token {
    #[terminal("pure")]
    Pure,
    #[terminal("partial")]
    Partial,
    #[terminal("total")]
    Total,
    #[terminal("divergent")]
    Divergent,
    #[terminal("if")]
    If,
    #[terminal("then")]
    Then,
    #[terminal("else")]
    Else,
    #[terminal("match")]
    MatchKeyword,
    #[terminal("repeat")]
    Repeat,
    #[terminal("run")]
    Run,
    #[literal("[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[literal(r"[0-9]+(\.[0-9]+)?")]
    Number,
    #[terminal("=")]
    Equals,
    #[terminal("<-")]
    LeftArrow,
    #[terminal("->")]
    RightArrow,
    #[terminal(":")]
    Colon,
    #[terminal(":=")]
    Assign,
    #[terminal("*")]
    Star,
    #[terminal("/")]
    Slash,
    #[terminal("+")]
    Plus,
    #[terminal("-")]
    Minus,
    #[terminal(">")]
    GreaterThan,
    #[terminal("<")]
    LessThan,
    #[terminal(">=")]
    GreaterEquals,
    #[terminal("<=")]
    LessEquals,
    #[terminal("==")]
    DoubleEquals,
    #[terminal("!=")]
    NotEquals,
    #[terminal("&&")]
    LogicalAnd,
    #[terminal("||")]
    LogicalOr,
    #[terminal("!")]
    Bang,
    #[terminal("'")]
    Quote,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal("{")]
    LBrace,
    #[terminal("}")]
    RBrace,
    #[terminal(",")]
    Comma,
    #[terminal(";")]
    Semicolon,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Pure(inner) => inner.position.clone(),
            Token::Partial(inner) => inner.position.clone(),
            Token::Total(inner) => inner.position.clone(),
            Token::Divergent(inner) => inner.position.clone(),
            Token::If(inner) => inner.position.clone(),
            Token::Then(inner) => inner.position.clone(),
            Token::Else(inner) => inner.position.clone(),
            Token::MatchKeyword(inner) => inner.position.clone(),
            Token::Repeat(inner) => inner.position.clone(),
            Token::Run(inner) => inner.position.clone(),
            Token::Ident(inner) => inner.position.clone(),
            Token::Number(inner) => inner.position.clone(),
            Token::Equals(inner) => inner.position.clone(),
            Token::LeftArrow(inner) => inner.position.clone(),
            Token::RightArrow(inner) => inner.position.clone(),
            Token::Colon(inner) => inner.position.clone(),
            Token::Assign(inner) => inner.position.clone(),
            Token::Star(inner) => inner.position.clone(),
            Token::Slash(inner) => inner.position.clone(),
            Token::Plus(inner) => inner.position.clone(),
            Token::Minus(inner) => inner.position.clone(),
            Token::GreaterThan(inner) => inner.position.clone(),
            Token::LessThan(inner) => inner.position.clone(),
            Token::GreaterEquals(inner) => inner.position.clone(),
            Token::LessEquals(inner) => inner.position.clone(),
            Token::DoubleEquals(inner) => inner.position.clone(),
            Token::NotEquals(inner) => inner.position.clone(),
            Token::LogicalAnd(inner) => inner.position.clone(),
            Token::LogicalOr(inner) => inner.position.clone(),
            Token::Bang(inner) => inner.position.clone(),
            Token::Quote(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
            Token::LBrace(inner) => inner.position.clone(),
            Token::RBrace(inner) => inner.position.clone(),
            Token::Comma(inner) => inner.position.clone(),
            Token::Semicolon(inner) => inner.position.clone(),
        }
    }

    /// The canonical operator name, if this token is an operator that
    /// desugars to an application of that name.
    pub fn operator_symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            Token::Assign(_) => ":=",
            Token::Star(_) => "*",
            Token::Slash(_) => "/",
            Token::Plus(_) => "+",
            Token::Minus(_) => "-",
            Token::GreaterThan(_) => ">",
            Token::LessThan(_) => "<",
            Token::GreaterEquals(_) => ">=",
            Token::LessEquals(_) => "<=",
            Token::DoubleEquals(_) => "==",
            Token::NotEquals(_) => "!=",
            Token::LogicalAnd(_) => "&&",
            Token::LogicalOr(_) => "||",
            Token::Bang(_) => "!",
            _ => return None,
        };
        Some(symbol)
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Pure(_) => "'pure'".to_string(),
            Token::Partial(_) => "'partial'".to_string(),
            Token::Total(_) => "'total'".to_string(),
            Token::Divergent(_) => "'divergent'".to_string(),
            Token::If(_) => "'if'".to_string(),
            Token::Then(_) => "'then'".to_string(),
            Token::Else(_) => "'else'".to_string(),
            Token::MatchKeyword(_) => "'match'".to_string(),
            Token::Repeat(_) => "'repeat'".to_string(),
            Token::Run(_) => "'run'".to_string(),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Number(inner) => format!("number '{}'", inner.value),
            Token::Equals(_) => "'='".to_string(),
            Token::LeftArrow(_) => "'<-'".to_string(),
            Token::RightArrow(_) => "'->'".to_string(),
            Token::Colon(_) => "':'".to_string(),
            Token::Quote(_) => "'''".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
            Token::LBrace(_) => "'{'".to_string(),
            Token::RBrace(_) => "'}'".to_string(),
            Token::Comma(_) => "','".to_string(),
            Token::Semicolon(_) => "';'".to_string(),
            other => match other.operator_symbol() {
                Some(symbol) => format!("'{symbol}'"),
                None => "token".to_string(),
            },
        }
    }
}

/// 1-based (line, column) of the character after `prefix`.
fn line_column(prefix: &[char]) -> (usize, usize) {
    let line = 1 + prefix.iter().filter(|c| **c == '\n').count();
    let column = 1 + prefix.iter().rev().take_while(|c| **c != '\n').count();
    (line, column)
}

/// Walk `source` the way the token rules consume it and report the first
/// character no rule can start a token with, as (line, column, char).
///
/// Single-character operators and punctuation always lex on their own, so
/// only words, numerals and the doubled `&&`/`||` need more than one step.
fn first_unlexable(source: &str) -> Option<(usize, usize, char)> {
    let chars: Vec<char> = source.chars().collect();
    let run = |from: usize, pred: fn(&char) -> bool| {
        chars[from..].iter().take_while(|c| pred(c)).count()
    };

    let mut i = 0;
    while let Some(&c) = chars.get(i) {
        let next = chars.get(i + 1).copied();
        let width = if c.is_ascii_alphabetic() || c == '_' {
            1 + run(i + 1, |c| c.is_ascii_alphanumeric() || *c == '_')
        } else if c.is_ascii_digit() {
            let whole = run(i, char::is_ascii_digit);
            let fraction = chars.get(i + whole + 1).is_some_and(char::is_ascii_digit);
            match chars.get(i + whole) {
                Some('.') if fraction => whole + 1 + run(i + whole + 1, char::is_ascii_digit),
                _ => whole,
            }
        } else if (c == '&' || c == '|') && next == Some(c) {
            2
        } else if c.is_ascii_whitespace() || "=<>-:*/+!'(){},;".contains(c) {
            1
        } else {
            let (line, column) = line_column(&chars[..i]);
            return Some((line, column, c));
        };
        i += width;
    }
    None
}

/// Replace `// ...` and `/* ... */` comments with spaces, keeping newlines.
pub fn strip_comments(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('/', Some('/')) => {
                result.push_str("  ");
                chars.next();
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    result.push(' ');
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                result.push_str("  ");
                chars.next();
                while let Some(next) = chars.next() {
                    if next == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        result.push_str("  ");
                        break;
                    }
                    result.push(if next == '\n' { '\n' } else { ' ' });
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Tokenize a whole source string, comments included.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let stripped = strip_comments(source);
    Token::lex(&stripped).map_err(|err| match first_unlexable(&stripped) {
        Some((line, column, c)) => {
            ParseError::lexical(format!("unrecognized character '{c}' at {line}:{column}"))
        }
        None => ParseError::lexical(err.to_string()),
    })
}
