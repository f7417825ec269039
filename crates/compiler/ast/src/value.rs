//! # Values
//!
//! Leaf expressions: integer literals and variable references.

use std::str::FromStr;

use crate::{AstError, AstResult};

/// A leaf of the expression tree.
///
/// # Invariants
///
/// - A `Num` never changes after construction and has no free variables
/// - A `Var` has exactly one free variable: its own name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Integer literal
    Num(i64),

    /// Reference to a named variable
    Var(String),
}

impl Value {
    /// Creates an integer literal
    pub const fn num(value: i64) -> Self {
        Self::Num(value)
    }

    /// Creates a variable reference
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Builds an integer literal from raw token text.
    ///
    /// Surrounding whitespace and a leading sign are accepted; anything else
    /// that is not a base-10 integer fails with [`AstError::ValueConversion`].
    pub fn num_from_str(input: &str) -> AstResult<Self> {
        input
            .trim()
            .parse::<i64>()
            .map(Self::Num)
            .map_err(|_| AstError::ValueConversion {
                input: input.to_string(),
            })
    }

    /// Returns true if this is an integer literal
    pub const fn is_num(&self) -> bool {
        matches!(self, Self::Num(_))
    }

    /// Returns true if this is a variable reference
    pub const fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// Returns the literal value if this is a `Num`
    pub const fn as_num(&self) -> Option<i64> {
        match self {
            Self::Num(value) => Some(*value),
            Self::Var(_) => None,
        }
    }

    /// Returns the variable name if this is a `Var`
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Self::Var(name) => Some(name),
            Self::Num(_) => None,
        }
    }

    /// Returns the free variables of this value
    pub fn variables(&self) -> Vec<String> {
        match self {
            Self::Num(_) => Vec::new(),
            Self::Var(name) => vec![name.clone()],
        }
    }

    /// Renames this value in place if it is a reference to `old`
    pub fn rename(&mut self, old: &str, new: &str) {
        if let Self::Var(name) = self {
            if name == old {
                *name = new.to_string();
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl FromStr for Value {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::num_from_str(s)
    }
}

impl TryFrom<&str> for Value {
    type Error = AstError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::num_from_str(value)
    }
}

impl TryFrom<f64> for Value {
    type Error = AstError;

    /// Only integral, in-range floats convert; the fractional part is never
    /// silently dropped.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Ok(Self::Num(value as i64))
        } else {
            Err(AstError::ValueConversion {
                input: value.to_string(),
            })
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(value) => write!(f, "{value}"),
            Self::Var(name) => write!(f, "{name}"),
        }
    }
}
