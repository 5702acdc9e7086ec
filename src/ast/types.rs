//! Type annotations as written on parameters.

use std::fmt;

/// Termination and purity class of a function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    /// No qualifier written
    #[default]
    Inferred,
    Pure,
    Partial,
    Divergent,
    Total,
}

impl Effect {
    /// The reserved word for this effect, `None` for [`Effect::Inferred`].
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Effect::Inferred => None,
            Effect::Pure => Some("pure"),
            Effect::Partial => Some("partial"),
            Effect::Divergent => Some("divergent"),
            Effect::Total => Some("total"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Type {
    /// No annotation given
    #[default]
    Inferred,
    /// A quoted type variable, `'a`
    Variable(String),
    Named(String),
    /// `(arguments) -> effect result`
    Function {
        arguments: Vec<Type>,
        effect: Effect,
        result: Box<Type>,
    },
}

impl Type {
    pub fn function(arguments: Vec<Type>, effect: Effect, result: Type) -> Self {
        Type::Function {
            arguments,
            effect,
            result: Box::new(result),
        }
    }

    /// Render the annotation in source syntax; `_` stands for no annotation.
    pub fn pretty(&self) -> String {
        match self {
            Type::Inferred => "_".to_string(),
            Type::Variable(name) => format!("'{name}"),
            Type::Named(name) => name.clone(),
            Type::Function {
                arguments,
                effect,
                result,
            } => {
                let arguments = match arguments.as_slice() {
                    [single @ (Type::Variable(_) | Type::Named(_))] => single.pretty(),
                    _ => format!(
                        "({})",
                        arguments.iter().map(Type::pretty).collect::<Vec<_>>().join(", ")
                    ),
                };
                match effect.keyword() {
                    Some(keyword) => format!("{arguments} -> {keyword} {}", result.pretty()),
                    None => format!("{arguments} -> {}", result.pretty()),
                }
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
