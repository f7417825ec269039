//! # Chiron Intermediate Representation
//!
//! This crate holds the control-flow graph of a Chiron program and the
//! analyses that prepare it for Static Single Assignment form.
//!
//! ## Architecture
//!
//! ```text
//! ControlFlowGraph
//!   basic_blocks: IndexVec<BasicBlockId, BasicBlock>   (entry = first block)
//!
//! BasicBlock
//!   label: String
//!   instructions: Vec<(Statement, position)>
//!   preds / succs: Vec<BasicBlockId>
//!
//! Statement
//!   Instr(chiron_compiler_ast::Instruction)
//!   Phi(PhiFunction)
//! ```
//!
//! ## SSA Construction
//!
//! [`construct_ssa`] runs three steps over a graph produced by the CFG
//! builder:
//!
//! 1. Dominator sets, by iterative fixpoint ([`analysis::compute_dominators`])
//! 2. Dominance frontiers ([`analysis::compute_dominance_frontiers`])
//! 3. Phi placement at the frontiers of every assignment
//!    ([`passes::phi_placement::insert_phi_functions`])
//!
//! The graph is annotated in place. Renaming definitions to subscripted SSA
//! names and filling in phi arguments is left to a later pass.

pub use basic_block::{BasicBlock, Statement};
pub use cfg::ControlFlowGraph;
pub use config::{FrontierWalk, SsaConfig};
pub use error::{SsaError, SsaResult};
pub use passes::{IrPass, PassManager, SsaConstruction};
pub use phi::PhiFunction;
pub use ssa::{construct_ssa, construct_ssa_with, SsaStats};

pub mod analysis;
pub mod basic_block;
pub mod cfg;
pub mod config;
pub mod error;
pub mod passes;
pub mod phi;
pub mod ssa;

#[cfg(test)]
pub mod testing;

// --- Core Identifiers ---

index_vec::define_index_type! {
    /// Unique identifier for a basic block within a control-flow graph
    pub struct BasicBlockId = usize;
    DISPLAY_FORMAT = "bb{}";
}

// --- Pretty Printing Support ---

/// Trait for pretty-printing IR constructs
pub trait PrettyPrint {
    fn pretty_print(&self, indent: usize) -> String;
}

/// Helper function to create indentation
pub(crate) fn indent_str(level: usize) -> String {
    "  ".repeat(level)
}
