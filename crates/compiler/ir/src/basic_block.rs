//! # Basic Blocks
//!
//! This module defines basic blocks, the nodes of the control-flow graph.
//! A basic block is a straight-line sequence of statements with exactly one
//! entry point and one exit point.

use chiron_compiler_ast::Instruction;
use rustc_hash::FxHashSet;

use crate::{BasicBlockId, PhiFunction};

/// An entry of a block's instruction list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A source-level instruction placed by the CFG builder
    Instr(Instruction),

    /// A phi function placed by SSA construction
    Phi(PhiFunction),
}

impl Statement {
    /// Returns the variable defined by this statement.
    ///
    /// Only assignments define variables here. A phi function merges a
    /// variable but is not a definition site for phi placement.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Instr(instruction) => instruction.target(),
            Self::Phi(_) => None,
        }
    }

    pub const fn as_instruction(&self) -> Option<&Instruction> {
        match self {
            Self::Instr(instruction) => Some(instruction),
            Self::Phi(_) => None,
        }
    }

    pub const fn as_phi(&self) -> Option<&PhiFunction> {
        match self {
            Self::Phi(phi) => Some(phi),
            Self::Instr(_) => None,
        }
    }

    pub const fn is_phi(&self) -> bool {
        matches!(self, Self::Phi(_))
    }
}

impl From<Instruction> for Statement {
    fn from(instruction: Instruction) -> Self {
        Self::Instr(instruction)
    }
}

impl From<PhiFunction> for Statement {
    fn from(phi: PhiFunction) -> Self {
        Self::Phi(phi)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instr(instruction) => write!(f, "{instruction}"),
            Self::Phi(phi) => write!(f, "{phi}"),
        }
    }
}

/// A basic block in the control-flow graph
///
/// # Invariants
///
/// - The position stored next to each statement is the index it was
///   appended at
/// - `preds` and `succs` mirror each other across the graph; both are
///   maintained by [`crate::ControlFlowGraph::connect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicBlock {
    /// Stable display name of this block
    pub label: String,

    /// The statements of this block with their positions, in program order
    pub instructions: Vec<(Statement, usize)>,

    /// Blocks with an edge into this block
    pub preds: Vec<BasicBlockId>,

    /// Blocks this block may transfer control to
    pub succs: Vec<BasicBlockId>,
}

impl BasicBlock {
    /// Creates a new empty basic block
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instructions: Vec::new(),
            preds: Vec::new(),
            succs: Vec::new(),
        }
    }

    /// Appends a statement and returns the position it was stored at
    pub fn push_statement(&mut self, statement: impl Into<Statement>) -> usize {
        let position = self.instructions.len();
        self.instructions.push((statement.into(), position));
        position
    }

    /// Returns the number of statements in this block
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if this block has no statements
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns an iterator over the statements of this block
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.instructions.iter().map(|(statement, _)| statement)
    }

    /// Returns the phi functions of this block, in insertion order
    pub fn phi_functions(&self) -> impl Iterator<Item = &PhiFunction> {
        self.statements().filter_map(Statement::as_phi)
    }

    /// Returns the variables that already have a phi function in this block
    pub fn phi_variables(&self) -> FxHashSet<String> {
        self.phi_functions().map(|phi| phi.var.clone()).collect()
    }

    /// Returns true if this block holds a phi function for `var`
    pub fn has_phi_for(&self, var: &str) -> bool {
        self.phi_functions().any(|phi| phi.var == var)
    }

    /// Returns the assignment targets of this block in program order.
    ///
    /// A variable assigned twice is listed twice.
    pub fn assigned_variables(&self) -> Vec<String> {
        self.statements()
            .filter_map(Statement::target)
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn add_pred(&mut self, pred: BasicBlockId) {
        if !self.preds.contains(&pred) {
            self.preds.push(pred);
        }
    }

    pub(crate) fn add_succ(&mut self, succ: BasicBlockId) {
        if !self.succs.contains(&succ) {
            self.succs.push(succ);
        }
    }
}
