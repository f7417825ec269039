//! # Expressions
//!
//! Arithmetic and boolean expressions of the turtle language.
//!
//! The tree is a closed sum type. Composite nodes own their children through
//! `Box`, so renaming a variable mutates the tree in place without any
//! sharing between instructions.

use crate::Value;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Arithmetic negation (`-e`)
    Neg,
    /// Logical negation (`not e`)
    Not,
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "not",
        }
    }
}

/// Binary operators, arithmetic and boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Neq,
}

impl BinaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::And => "and",
            Self::Or => "or",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Neq => "!=",
        }
    }

    /// Returns true for `+`, `-`, `*` and `/`
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Returns true for comparisons (`<`, `>`, `<=`, `>=`, `==`, `!=`)
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Lt | Self::Gt | Self::Le | Self::Ge | Self::Eq | Self::Neq
        )
    }

    /// Returns true for `and` and `or`
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression node.
///
/// # Invariants
///
/// - `variables()` lists the variables of the left operand before those of
///   the right operand, duplicates included
/// - `rename(old, new)` rewrites every reachable occurrence of `old` and
///   leaves the tree untouched when `old` does not occur
/// - `True`, `False` and `PenStatus` have no variables
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Integer literal or variable reference
    Value(Value),

    /// Unary operation (e.g., `-x`, `not(x < 3)`)
    Unary { op: UnaryOp, expr: Box<Expression> },

    /// Binary operation (e.g., `(x + 1)`, `(a and b)`)
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Boolean constant `True`
    True,

    /// Boolean constant `False`
    False,

    /// Sensor query: is the pen currently down?
    PenStatus,
}

impl Expression {
    pub const fn num(value: i64) -> Self {
        Self::Value(Value::Num(value))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Value(Value::var(name))
    }

    pub fn unary(op: UnaryOp, expr: Self) -> Self {
        Self::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn neg(expr: Self) -> Self {
        Self::unary(UnaryOp::Neg, expr)
    }

    pub fn not(expr: Self) -> Self {
        Self::unary(UnaryOp::Not, expr)
    }

    pub fn sum(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Add, left, right)
    }

    pub fn diff(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Sub, left, right)
    }

    pub fn mult(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Mul, left, right)
    }

    pub fn div(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Div, left, right)
    }

    pub fn and(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Or, left, right)
    }

    pub fn lt(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Lt, left, right)
    }

    pub fn gt(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Gt, left, right)
    }

    pub fn le(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Le, left, right)
    }

    pub fn ge(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Ge, left, right)
    }

    pub fn equal(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Eq, left, right)
    }

    pub fn not_equal(left: Self, right: Self) -> Self {
        Self::binary(BinaryOp::Neq, left, right)
    }

    /// Returns true if this expression evaluates to a boolean
    pub fn is_boolean(&self) -> bool {
        match self {
            Self::True | Self::False | Self::PenStatus => true,
            Self::Unary { op, .. } => matches!(op, UnaryOp::Not),
            Self::Binary { op, .. } => !op.is_arithmetic(),
            Self::Value(_) => false,
        }
    }

    /// Returns the variables read by this expression, in traversal order.
    pub fn variables(&self) -> Vec<String> {
        let mut variables = Vec::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, out: &mut Vec<String>) {
        match self {
            Self::Value(Value::Var(name)) => out.push(name.clone()),
            Self::Value(Value::Num(_)) | Self::True | Self::False | Self::PenStatus => {}
            Self::Unary { expr, .. } => expr.collect_variables(out),
            Self::Binary { left, right, .. } => {
                left.collect_variables(out);
                right.collect_variables(out);
            }
        }
    }

    /// Renames every occurrence of `old` to `new`, in place.
    pub fn rename(&mut self, old: &str, new: &str) {
        match self {
            Self::Value(value) => value.rename(old, new),
            Self::Unary { expr, .. } => expr.rename(old, new),
            Self::Binary { left, right, .. } => {
                left.rename(old, new);
                right.rename(old, new);
            }
            Self::True | Self::False | Self::PenStatus => {}
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Unary { op, expr } => write!(f, "{}{}", op.symbol(), expr),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::True => f.write_str("True"),
            Self::False => f.write_str("False"),
            Self::PenStatus => f.write_str("pendown?"),
        }
    }
}
