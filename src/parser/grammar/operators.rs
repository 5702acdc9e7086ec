//! Operator precedence table
//!
//! Every operator desugars to an application of its own name, so adding an
//! operator means adding its lexeme here (and a token in the lexer).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    /// `a op b op c` groups as `(a op b) op c`
    InfixLeft,
    /// `op op a` groups as `op (op a)`
    Prefix,
}

#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub fixity: Fixity,
    pub operators: &'static [&'static str],
}

/// Operator tiers, tightest binding first.
pub const OPERATOR_TABLE: &[Tier] = &[
    Tier {
        fixity: Fixity::Prefix,
        operators: &["!"],
    },
    Tier {
        fixity: Fixity::InfixLeft,
        operators: &["*", "/"],
    },
    Tier {
        fixity: Fixity::InfixLeft,
        operators: &["+", "-"],
    },
    Tier {
        fixity: Fixity::InfixLeft,
        operators: &[">", "<", ">=", "<="],
    },
    Tier {
        fixity: Fixity::InfixLeft,
        operators: &["==", "!="],
    },
    Tier {
        fixity: Fixity::InfixLeft,
        operators: &["&&"],
    },
    Tier {
        fixity: Fixity::InfixLeft,
        operators: &["||"],
    },
    Tier {
        fixity: Fixity::InfixLeft,
        operators: &[":="],
    },
];

/// Whether `name` is one of the operator names the parser desugars to.
pub fn is_operator(name: &str) -> bool {
    OPERATOR_TABLE
        .iter()
        .any(|tier| tier.operators.contains(&name))
}
