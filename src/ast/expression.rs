use super::pattern::MatchClause;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Variable(String),
    NumericLiteral(f64),
    /// `function(arguments...)`; chained calls nest to the left.
    Application {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    IfThenElse {
        condition: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },
    /// `name = value; body`
    LetBind {
        name: String,
        value: Box<Expression>,
        body: Box<Expression>,
    },
    /// `name <- value; body`, where `value` is an effectful computation
    EffectBind {
        name: String,
        value: Box<Expression>,
        body: Box<Expression>,
    },
    /// `first; rest`, only the value of `rest` is kept
    Compound {
        first: Box<Expression>,
        rest: Box<Expression>,
    },
    Repeat {
        count: Box<Expression>,
        body: Box<Expression>,
    },
    Run(Box<Expression>),
    Match {
        scrutinee: Box<Expression>,
        clauses: Vec<MatchClause>,
    },
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn number(value: f64) -> Self {
        Expression::NumericLiteral(value)
    }

    pub fn apply(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Application {
            function: Box::new(function),
            arguments,
        }
    }

    /// `left op right` as the application of the operator's name.
    pub fn binary(op: &str, left: Expression, right: Expression) -> Self {
        Self::apply(Self::variable(op), vec![left, right])
    }

    /// `op operand` as the application of the operator's name.
    pub fn prefix(op: &str, operand: Expression) -> Self {
        Self::apply(Self::variable(op), vec![operand])
    }
}
