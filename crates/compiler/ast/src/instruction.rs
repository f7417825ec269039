//! # Instructions
//!
//! Statements of the turtle language. Instructions are what the CFG builder
//! places into basic blocks; they never transfer control themselves (a
//! `Condition` only provides the predicate of the branch ending its block).

use std::str::FromStr;

use crate::{AstError, Expression};

/// Direction of a turtle move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for MoveDirection {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "backward" | "back" => Ok(Self::Backward),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(AstError::UnknownDirection(other.to_string())),
        }
    }
}

impl std::fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Pen status set by a pen instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenState {
    Up,
    Down,
}

impl PenState {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Up => "penup",
            Self::Down => "pendown",
        }
    }
}

impl FromStr for PenState {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "penup" => Ok(Self::Up),
            "pendown" => Ok(Self::Down),
            other => Err(AstError::UnknownPenState(other.to_string())),
        }
    }
}

impl std::fmt::Display for PenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A statement of the turtle language
///
/// # Invariants
///
/// - Only `Assignment` has a target. It is the one definition site SSA
///   construction keys on
/// - Every other variant answers `None` from [`Instruction::target`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Binds `target` to the value of `expr` (e.g., `:x = (:x + 1)`)
    Assignment { target: String, expr: Expression },

    /// Branch predicate ending a block
    Condition(Expression),

    /// Assertion; parsed but not executed yet
    Assert(Expression),

    /// Moves or turns the turtle (e.g., `forward 10`)
    Move {
        direction: MoveDirection,
        distance: Expression,
    },

    /// Lifts or lowers the pen
    Pen(PenState),

    /// Teleports the turtle to absolute coordinates
    Goto { x: Expression, y: Expression },

    NoOp,

    Pause,
}

impl Instruction {
    pub fn assign(target: impl Into<String>, expr: Expression) -> Self {
        Self::Assignment {
            target: target.into(),
            expr,
        }
    }

    pub const fn condition(expr: Expression) -> Self {
        Self::Condition(expr)
    }

    pub const fn assert(expr: Expression) -> Self {
        Self::Assert(expr)
    }

    pub const fn move_turtle(direction: MoveDirection, distance: Expression) -> Self {
        Self::Move {
            direction,
            distance,
        }
    }

    pub const fn pen(state: PenState) -> Self {
        Self::Pen(state)
    }

    pub const fn goto(x: Expression, y: Expression) -> Self {
        Self::Goto { x, y }
    }

    /// Returns the variable defined by this instruction, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Assignment { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Replaces the assignment target.
    ///
    /// Returns false, leaving the instruction untouched, when this is not an
    /// assignment.
    pub fn set_target(&mut self, name: impl Into<String>) -> bool {
        match self {
            Self::Assignment { target, .. } => {
                *target = name.into();
                true
            }
            _ => false,
        }
    }

    /// Returns the expressions read by this instruction, in operand order
    pub fn operands(&self) -> Vec<&Expression> {
        match self {
            Self::Assignment { expr, .. } | Self::Condition(expr) | Self::Assert(expr) => {
                vec![expr]
            }
            Self::Move { distance, .. } => vec![distance],
            Self::Goto { x, y } => vec![x, y],
            Self::Pen(_) | Self::NoOp | Self::Pause => Vec::new(),
        }
    }

    fn operands_mut(&mut self) -> Vec<&mut Expression> {
        match self {
            Self::Assignment { expr, .. } | Self::Condition(expr) | Self::Assert(expr) => {
                vec![expr]
            }
            Self::Move { distance, .. } => vec![distance],
            Self::Goto { x, y } => vec![x, y],
            Self::Pen(_) | Self::NoOp | Self::Pause => Vec::new(),
        }
    }

    /// Returns the variables read by this instruction.
    ///
    /// The assignment target is a definition, not a use, and is not listed.
    pub fn variables(&self) -> Vec<String> {
        self.operands()
            .into_iter()
            .flat_map(Expression::variables)
            .collect()
    }

    /// Renames every read occurrence of `old` to `new`.
    ///
    /// The assignment target is left alone; use [`Instruction::set_target`]
    /// to rewrite definitions.
    pub fn rename_uses(&mut self, old: &str, new: &str) {
        for operand in self.operands_mut() {
            operand.rename(old, new);
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment { target, expr } => write!(f, "{target} = {expr}"),
            Self::Condition(expr) | Self::Assert(expr) => write!(f, "{expr}"),
            Self::Move {
                direction,
                distance,
            } => write!(f, "{direction} {distance}"),
            Self::Pen(state) => write!(f, "{state}"),
            Self::Goto { x, y } => write!(f, "goto {x} {y}"),
            Self::NoOp => f.write_str("NOP"),
            Self::Pause => f.write_str("pause"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_plus_one() -> Expression {
        Expression::sum(Expression::var("x"), Expression::num(1))
    }

    #[test]
    fn test_only_assignment_has_target() {
        let assign = Instruction::assign("x", x_plus_one());
        assert_eq!(assign.target(), Some("x"));

        let others = [
            Instruction::condition(Expression::lt(Expression::var("x"), Expression::num(3))),
            Instruction::assert(Expression::True),
            Instruction::move_turtle(MoveDirection::Forward, Expression::var("x")),
            Instruction::pen(PenState::Down),
            Instruction::goto(Expression::num(0), Expression::var("y")),
            Instruction::NoOp,
            Instruction::Pause,
        ];
        for instruction in &others {
            assert_eq!(instruction.target(), None, "{instruction} has no target");
        }
    }

    #[test]
    fn test_set_target() {
        let mut assign = Instruction::assign("x", x_plus_one());
        assert!(assign.set_target("x1"));
        assert_eq!(assign.to_string(), "x1 = (x + 1)");

        let mut pause = Instruction::Pause;
        assert!(!pause.set_target("x1"));
        assert_eq!(pause, Instruction::Pause);
    }

    #[test]
    fn test_variables_exclude_target() {
        let assign = Instruction::assign("x", x_plus_one());
        assert_eq!(assign.variables(), vec!["x".to_string()]);

        let goto = Instruction::goto(Expression::var("a"), Expression::var("b"));
        assert_eq!(goto.variables(), vec!["a".to_string(), "b".to_string()]);

        assert!(Instruction::pen(PenState::Up).variables().is_empty());
    }

    #[test]
    fn test_rename_uses_keeps_target() {
        let mut assign = Instruction::assign("x", x_plus_one());
        assign.rename_uses("x", "x0");
        assert_eq!(assign.to_string(), "x = (x0 + 1)");
    }

    #[test]
    fn test_display() {
        let cases = [
            (
                Instruction::move_turtle(MoveDirection::Left, Expression::num(90)),
                "left 90",
            ),
            (Instruction::pen(PenState::Up), "penup"),
            (
                Instruction::goto(Expression::num(10), Expression::neg(Expression::num(5))),
                "goto 10 -5",
            ),
            (Instruction::NoOp, "NOP"),
            (Instruction::Pause, "pause"),
            (
                Instruction::condition(Expression::not(Expression::PenStatus)),
                "notpendown?",
            ),
        ];
        for (instruction, expected) in cases {
            assert_eq!(instruction.to_string(), expected);
        }
    }

    #[test]
    fn test_keyword_parsing() {
        assert_eq!("back".parse::<MoveDirection>(), Ok(MoveDirection::Backward));
        assert_eq!("right".parse::<MoveDirection>(), Ok(MoveDirection::Right));
        assert_eq!(
            "up".parse::<MoveDirection>(),
            Err(AstError::UnknownDirection("up".to_string()))
        );
        assert_eq!("pendown".parse::<PenState>(), Ok(PenState::Down));
        assert!("down".parse::<PenState>().is_err());
    }
}
