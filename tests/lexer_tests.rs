use effy::lexer::{Token, tokenize};

#[test]
fn lex_keywords() {
    let tokens = Token::lex("if then else match repeat run").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[0], Token::If(_)));
    assert!(matches!(tokens[1], Token::Then(_)));
    assert!(matches!(tokens[2], Token::Else(_)));
    assert!(matches!(tokens[3], Token::MatchKeyword(_)));
    assert!(matches!(tokens[4], Token::Repeat(_)));
    assert!(matches!(tokens[5], Token::Run(_)));
}

#[test]
fn lex_effect_keywords() {
    let tokens = Token::lex("pure partial divergent total").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(tokens[0], Token::Pure(_)));
    assert!(matches!(tokens[1], Token::Partial(_)));
    assert!(matches!(tokens[2], Token::Divergent(_)));
    assert!(matches!(tokens[3], Token::Total(_)));
}

#[test]
fn lex_identifiers() {
    let tokens = Token::lex("foo bar_baz x1 _tmp").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "foo"));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "bar_baz"));
    assert!(matches!(&tokens[2], Token::Ident(i) if i.value == "x1"));
    assert!(matches!(&tokens[3], Token::Ident(i) if i.value == "_tmp"));
}

#[test]
fn lex_keyword_prefix_is_identifier() {
    // Longest match: `iffy` and `running` are not keywords
    let tokens = Token::lex("iffy running").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "iffy"));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "running"));
}

#[test]
fn lex_numbers() {
    let tokens = Token::lex("42 0 3.25").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Number(n) if n.value == "42"));
    assert!(matches!(&tokens[1], Token::Number(n) if n.value == "0"));
    assert!(matches!(&tokens[2], Token::Number(n) if n.value == "3.25"));
}

#[test]
fn lex_punctuation() {
    let tokens = Token::lex("( ) { } , ; : '").unwrap();
    assert_eq!(tokens.len(), 8);
    assert!(matches!(tokens[0], Token::LParen(_)));
    assert!(matches!(tokens[1], Token::RParen(_)));
    assert!(matches!(tokens[2], Token::LBrace(_)));
    assert!(matches!(tokens[3], Token::RBrace(_)));
    assert!(matches!(tokens[4], Token::Comma(_)));
    assert!(matches!(tokens[5], Token::Semicolon(_)));
    assert!(matches!(tokens[6], Token::Colon(_)));
    assert!(matches!(tokens[7], Token::Quote(_)));
}

#[test]
fn lex_arrows_are_atomic() {
    let tokens = Token::lex("a<-b c->d").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[1], Token::LeftArrow(_)));
    assert!(matches!(tokens[4], Token::RightArrow(_)));
}

#[test]
fn lex_comparison_operators() {
    let tokens = Token::lex("== != < > <= >=").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[0], Token::DoubleEquals(_)));
    assert!(matches!(tokens[1], Token::NotEquals(_)));
    assert!(matches!(tokens[2], Token::LessThan(_)));
    assert!(matches!(tokens[3], Token::GreaterThan(_)));
    assert!(matches!(tokens[4], Token::LessEquals(_)));
    assert!(matches!(tokens[5], Token::GreaterEquals(_)));
}

#[test]
fn lex_equals_and_assign_longest_match() {
    let tokens = Token::lex("= == : :=").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(tokens[0], Token::Equals(_)));
    assert!(matches!(tokens[1], Token::DoubleEquals(_)));
    assert!(matches!(tokens[2], Token::Colon(_)));
    assert!(matches!(tokens[3], Token::Assign(_)));
}

#[test]
fn lex_arithmetic_operators() {
    let tokens = Token::lex("+ - * /").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(tokens[0], Token::Plus(_)));
    assert!(matches!(tokens[1], Token::Minus(_)));
    assert!(matches!(tokens[2], Token::Star(_)));
    assert!(matches!(tokens[3], Token::Slash(_)));
}

#[test]
fn lex_logical_operators() {
    let tokens = Token::lex("&& || ! !=").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(tokens[0], Token::LogicalAnd(_)));
    assert!(matches!(tokens[1], Token::LogicalOr(_)));
    assert!(matches!(tokens[2], Token::Bang(_)));
    assert!(matches!(tokens[3], Token::NotEquals(_)));
}

#[test]
fn operator_symbols() {
    let tokens = Token::lex("* := ! = <-").unwrap();
    assert_eq!(tokens[0].operator_symbol(), Some("*"));
    assert_eq!(tokens[1].operator_symbol(), Some(":="));
    assert_eq!(tokens[2].operator_symbol(), Some("!"));
    assert_eq!(tokens[3].operator_symbol(), None);
    assert_eq!(tokens[4].operator_symbol(), None);
}

#[test]
fn describe_tokens() {
    let tokens = Token::lex("foo 12 <= {").unwrap();
    assert_eq!(tokens[0].describe(), "identifier 'foo'");
    assert_eq!(tokens[1].describe(), "number '12'");
    assert_eq!(tokens[2].describe(), "'<='");
    assert_eq!(tokens[3].describe(), "'{'");
}

#[test]
fn lex_definition() {
    let tokens = tokenize("square(x){ x * x }").unwrap();
    assert_eq!(tokens.len(), 9);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "square"));
    assert!(matches!(tokens[1], Token::LParen(_)));
    assert!(matches!(tokens[4], Token::LBrace(_)));
    assert!(matches!(tokens[6], Token::Star(_)));
    assert!(matches!(tokens[8], Token::RBrace(_)));
}

#[test]
fn tokenize_rejects_unknown_character() {
    let Err(err) = tokenize("f(x) {\n  x @ 1\n}") else {
        panic!("expected a lexical error");
    };
    assert_eq!(err.kind, effy::parser::ErrorKind::Lexical);
    assert!(err.message.contains("'@'"), "{}", err.message);
    assert!(err.message.contains("2:5"), "{}", err.message);
}

#[test]
fn tokenize_reports_lone_ampersand_with_line_and_column() {
    let Err(err) = tokenize("f(x) {\n  x & 1\n}") else {
        panic!("expected a lexical error");
    };
    assert_eq!(err.kind, effy::parser::ErrorKind::Lexical);
    assert_eq!(err.message, "unrecognized character '&' at 2:5");
}

#[test]
fn tokenize_reports_stray_dot() {
    let Err(err) = tokenize("a.b") else {
        panic!("expected a lexical error");
    };
    assert_eq!(err.message, "unrecognized character '.' at 1:2");
}
