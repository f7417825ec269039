//! # Analysis Module
//!
//! This module contains the analyses performed on a control-flow graph
//! ahead of SSA construction: dominator sets, immediate dominators and
//! dominance frontiers.

pub mod dominance;
pub mod frontier;


pub use dominance::{
    compute_dominators, compute_immediate_dominators, DominatorSet, DominatorTree, Dominators,
};
pub use frontier::{compute_dominance_frontiers, DominanceFrontiers};
