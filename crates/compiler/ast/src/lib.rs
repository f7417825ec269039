//! # Chiron AST
//!
//! This crate defines the abstract syntax tree of the Chiron turtle-graphics
//! language as it is seen by the control-flow and SSA analyses.
//!
//! ## Node Model
//!
//! ```text
//! Instruction
//!   Assignment { target, expr }   <- the only definition site
//!   Condition / Assert (expr)
//!   Move { direction, distance }
//!   Pen / Goto / NoOp / Pause
//!
//! Expression
//!   Value (Num | Var)
//!   Unary { op, expr }
//!   Binary { op, left, right }
//!   True | False | PenStatus
//! ```
//!
//! Every expression can enumerate the variables it reads
//! ([`Expression::variables`]) and rename a variable in place
//! ([`Expression::rename`]). Both walk the tree left to right.
//!
//! Parsing source text into these nodes happens elsewhere; nodes are
//! constructed directly by the parser (or by tests) and are never validated
//! beyond the numeric literal conversion in [`Value::num_from_str`].

pub mod error;
pub mod expression;
pub mod instruction;
pub mod value;

pub use error::{AstError, AstResult};
pub use expression::{BinaryOp, Expression, UnaryOp};
pub use instruction::{Instruction, MoveDirection, PenState};
pub use value::Value;
