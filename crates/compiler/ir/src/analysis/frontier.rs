//! # Dominance Frontiers
//!
//! The dominance frontier of a block X is the set of blocks Y such that:
//! - X dominates a predecessor of Y, but
//! - X does not strictly dominate Y
//!
//! ## Algorithm
//! For each block B with ≥2 predecessors:
//!   For each predecessor P:
//!     Walk up from P until reaching a block that dominates B
//!     Add B to DF of each block on the path
//!
//! The walk stops at the first block that dominates B, B itself included.
//! A loop header is therefore never recorded in its own frontier.

use std::collections::BTreeSet;

use index_vec::IndexVec;

use super::dominance::{compute_immediate_dominators, DominatorTree, Dominators};
use crate::{BasicBlockId, ControlFlowGraph, FrontierWalk};

/// Dominance frontier of every block, ordered by block id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominanceFrontiers {
    frontiers: IndexVec<BasicBlockId, BTreeSet<BasicBlockId>>,
}

impl DominanceFrontiers {
    /// Returns the frontier of `block`
    pub fn frontier(&self, block: BasicBlockId) -> &BTreeSet<BasicBlockId> {
        &self.frontiers[block]
    }

    /// Iterates over `(block, frontier)` pairs in block order
    pub fn iter(&self) -> impl Iterator<Item = (BasicBlockId, &BTreeSet<BasicBlockId>)> {
        self.frontiers.iter_enumerated()
    }

    /// Returns true if every frontier is empty
    pub fn is_empty(&self) -> bool {
        self.frontiers.iter().all(BTreeSet::is_empty)
    }

    /// Total number of `(block, frontier member)` pairs
    pub fn edge_count(&self) -> usize {
        self.frontiers.iter().map(BTreeSet::len).sum()
    }
}

/// Computes the dominance frontier of every block of `cfg`.
///
/// `walk` selects how the walk climbs from a predecessor; see
/// [`FrontierWalk`].
pub fn compute_dominance_frontiers(
    cfg: &ControlFlowGraph,
    dominators: &Dominators,
    walk: FrontierWalk,
) -> DominanceFrontiers {
    let mut frontiers: IndexVec<BasicBlockId, BTreeSet<BasicBlockId>> =
        cfg.nodes().map(|_| BTreeSet::new()).collect();

    let idom = match walk {
        FrontierWalk::ImmediateDominator => Some(compute_immediate_dominators(cfg, dominators)),
        FrontierWalk::ArbitraryDominator => None,
    };

    for block in cfg.nodes() {
        let preds = cfg.predecessors(block);
        if preds.len() < 2 {
            continue;
        }

        for &pred in preds {
            let mut runner = pred;
            while !dominators.dominates(runner, block) {
                frontiers[runner].insert(block);
                match next_runner(runner, dominators, idom.as_ref()) {
                    Some(next) => runner = next,
                    // Reached the entry
                    None => break,
                }
            }
        }
    }

    let result = DominanceFrontiers { frontiers };
    log::debug!(
        "computed dominance frontiers ({:?} walk): {} frontier edges",
        walk,
        result.edge_count()
    );
    result
}

/// Picks the block the frontier walk moves to from `runner`.
///
/// With an idom tree the immediate dominator is used. Blocks without one
/// (the entry, unreachable blocks) and the arbitrary walk fall back to the
/// lowest-numbered proper dominator, which is the entry for every block but
/// the entry itself.
fn next_runner(
    runner: BasicBlockId,
    dominators: &Dominators,
    idom: Option<&DominatorTree>,
) -> Option<BasicBlockId> {
    if let Some(immediate) = idom.and_then(|tree| tree.get(&runner)) {
        return Some(*immediate);
    }

    dominators
        .dominators_of(runner)
        .iter()
        .copied()
        .filter(|candidate| *candidate != runner)
        .min()
}
