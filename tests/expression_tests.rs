use effy::ast::Expression;
use effy::parse_expression;
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Expression {
    parse_expression(source).unwrap_or_else(|err| panic!("parsing {source:?} failed: {err}"))
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn num(value: f64) -> Expression {
    Expression::number(value)
}

fn bin(op: &str, left: Expression, right: Expression) -> Expression {
    Expression::binary(op, left, right)
}

#[test]
fn numeric_literals() {
    for (source, value) in [
        ("0", 0.0),
        ("42", 42.0),
        ("-7", -7.0),
        ("3.25", 3.25),
        ("-0.5", -0.5),
        ("1000.125", 1000.125),
    ] {
        assert_eq!(parse(source), num(value), "source {source:?}");
    }
}

#[test]
fn sign_must_touch_the_numeral() {
    assert_eq!(parse("f(-3)"), Expression::apply(var("f"), vec![num(-3.0)]));
    assert_eq!(parse("a -3"), bin("-", var("a"), num(3.0)));
    assert!(parse_expression("- 3").is_err());
    assert!(parse_expression("-/* gap */3").is_err());
    assert!(parse_expression("f(-\n3)").is_err());
}

#[test]
fn variable() {
    assert_eq!(parse("x"), var("x"));
}

#[test]
fn application_with_arguments() {
    assert_eq!(
        parse("f(x, y)"),
        Expression::apply(var("f"), vec![var("x"), var("y")])
    );
}

#[test]
fn application_without_arguments() {
    assert_eq!(parse("f()"), Expression::apply(var("f"), vec![]));
}

#[test]
fn chained_application_folds_left() {
    assert_eq!(
        parse("f(x,y)(z)"),
        Expression::apply(
            Expression::apply(var("f"), vec![var("x"), var("y")]),
            vec![var("z")]
        )
    );
}

#[test]
fn juxtaposition_is_not_application() {
    assert!(parse_expression("f x").is_err());
}

#[test]
fn redundant_parentheses_are_transparent() {
    assert_eq!(parse("(x)"), parse("x"));
    assert_eq!(parse("((1 + 2))"), parse("1 + 2"));
    assert_eq!(parse("f((x))"), parse("f(x)"));
    assert_eq!(parse("(f)(x)"), parse("f(x)"));
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(
        parse("1 - 2 - 3"),
        bin("-", bin("-", num(1.0), num(2.0)), num(3.0))
    );
}

#[test]
fn subtraction_without_spaces() {
    assert_eq!(parse("a-1"), bin("-", var("a"), num(1.0)));
    assert_eq!(parse("1 - -2"), bin("-", num(1.0), num(-2.0)));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse("1 + 2 * 3"),
        bin("+", num(1.0), bin("*", num(2.0), num(3.0)))
    );
    assert_eq!(
        parse("1 * 2 + 3"),
        bin("+", bin("*", num(1.0), num(2.0)), num(3.0))
    );
}

#[test]
fn division_shares_tier_with_multiplication() {
    assert_eq!(
        parse("8 / 4 * 2"),
        bin("*", bin("/", num(8.0), num(4.0)), num(2.0))
    );
}

#[test]
fn mixed_boolean_precedence() {
    assert_eq!(
        parse("3 < 4 && 5 >= 4 || 1 != 0"),
        bin(
            "||",
            bin(
                "&&",
                bin("<", num(3.0), num(4.0)),
                bin(">=", num(5.0), num(4.0))
            ),
            bin("!=", num(1.0), num(0.0))
        )
    );
}

#[test]
fn equality_below_comparison() {
    assert_eq!(
        parse("a < b == c > d"),
        bin("==", bin("<", var("a"), var("b")), bin(">", var("c"), var("d")))
    );
}

#[test]
fn assignment_binds_loosest() {
    assert_eq!(
        parse("r := x + 1 || y"),
        bin(":=", var("r"), bin("||", bin("+", var("x"), num(1.0)), var("y")))
    );
}

#[test]
fn prefix_binds_tighter_than_binary() {
    assert_eq!(
        parse("!r + 1"),
        bin("+", Expression::prefix("!", var("r")), num(1.0))
    );
}

#[test]
fn prefix_applies_to_application() {
    assert_eq!(
        parse("!f(x)"),
        Expression::prefix("!", Expression::apply(var("f"), vec![var("x")]))
    );
}

#[test]
fn repeated_prefix_nests() {
    assert_eq!(
        parse("!!r"),
        Expression::prefix("!", Expression::prefix("!", var("r")))
    );
}

#[test]
fn operator_operands_can_be_applications() {
    assert_eq!(
        parse("f(x) * g(1, 2)"),
        bin(
            "*",
            Expression::apply(var("f"), vec![var("x")]),
            Expression::apply(var("g"), vec![num(1.0), num(2.0)])
        )
    );
}

#[test]
fn if_then_else() {
    assert_eq!(
        parse("if x > 0 then x else 0 - x"),
        Expression::IfThenElse {
            condition: Box::new(bin(">", var("x"), num(0.0))),
            consequent: Box::new(var("x")),
            alternate: Box::new(bin("-", num(0.0), var("x"))),
        }
    );
}

#[test]
fn nested_if_in_else_branch() {
    let expr = parse("if a then 1 else if b then 2 else 3");
    let Expression::IfThenElse { alternate, .. } = expr else {
        panic!("expected if-then-else");
    };
    assert!(matches!(*alternate, Expression::IfThenElse { .. }));
}

#[test]
fn if_is_not_an_operand_without_parentheses() {
    assert!(parse_expression("1 + if a then 1 else 2").is_err());
    assert_eq!(
        parse("1 + (if a then 1 else 2)"),
        bin(
            "+",
            num(1.0),
            Expression::IfThenElse {
                condition: Box::new(var("a")),
                consequent: Box::new(num(1.0)),
                alternate: Box::new(num(2.0)),
            }
        )
    );
}

#[test]
fn if_requires_else() {
    assert!(parse_expression("if a then b").is_err());
}

#[test]
fn block_as_atom() {
    assert_eq!(
        parse("{ a = 1; a } + 2"),
        bin(
            "+",
            Expression::LetBind {
                name: "a".to_string(),
                value: Box::new(num(1.0)),
                body: Box::new(var("a")),
            },
            num(2.0)
        )
    );
}

#[test]
fn block_can_be_applied() {
    assert_eq!(
        parse("{ f }(x)"),
        Expression::apply(var("f"), vec![var("x")])
    );
}
