//! # Dominance Analysis
//!
//! This module computes the dominator set of every block of a control-flow
//! graph, and from those sets the immediate dominator of every reachable
//! block.
//!
//! ## Dominator Sets
//! A block X dominates a block Y if every path from the entry to Y passes
//! through X. Every block dominates itself.
//!
//! ## Algorithm
//! Classic iterative fixpoint:
//! 1. `dom(entry) = {entry}`, every other block starts at the full block set
//! 2. For every non-entry block with predecessors:
//!    `dom(n) = (⋂ dom(p) for p in preds(n)) ∪ {n}`
//! 3. Repeat full passes until one pass changes nothing
//!
//! Each update can only shrink a set, and sets are bounded below by
//! `{entry, n}`, so the iteration terminates. The result does not depend on
//! the order blocks are visited in.
//!
//! Blocks that cannot be reached from the entry keep the full block set.
//! Their dominator sets carry no meaning; use [`Dominators::is_reachable`]
//! before trusting them.

use index_vec::IndexVec;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{BasicBlockId, ControlFlowGraph, SsaError, SsaResult};

/// The set of blocks dominating one block
pub type DominatorSet = FxHashSet<BasicBlockId>;

/// A dominator tree represented as a mapping from each block to its immediate dominator
pub type DominatorTree = FxHashMap<BasicBlockId, BasicBlockId>;

/// Dominator sets of every block of a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dominators {
    entry: BasicBlockId,
    sets: IndexVec<BasicBlockId, DominatorSet>,
    reachable: FxHashSet<BasicBlockId>,
    passes: usize,
}

impl Dominators {
    /// The block every dominator set is rooted at
    pub const fn entry(&self) -> BasicBlockId {
        self.entry
    }

    /// Returns the dominator set of `block`
    pub fn dominators_of(&self, block: BasicBlockId) -> &DominatorSet {
        &self.sets[block]
    }

    /// Returns true if `a` dominates `b` (every block dominates itself)
    pub fn dominates(&self, a: BasicBlockId, b: BasicBlockId) -> bool {
        self.sets[b].contains(&a)
    }

    /// Returns true if `a` dominates `b` and `a != b`
    pub fn strictly_dominates(&self, a: BasicBlockId, b: BasicBlockId) -> bool {
        a != b && self.dominates(a, b)
    }

    /// Returns true if `block` can be reached from the entry.
    ///
    /// The dominator set of an unreachable block is the full block set and
    /// must not be read as a dominance relation.
    pub fn is_reachable(&self, block: BasicBlockId) -> bool {
        self.reachable.contains(&block)
    }

    /// Iterates over `(block, dominator set)` pairs in block order
    pub fn iter(&self) -> impl Iterator<Item = (BasicBlockId, &DominatorSet)> {
        self.sets.iter_enumerated()
    }

    /// Number of blocks covered
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Number of full passes the fixpoint took, including the final
    /// pass that observed no change
    pub const fn passes(&self) -> usize {
        self.passes
    }
}

/// Computes the dominator set of every block of `cfg`.
///
/// The entry is the first block of the graph. Fails with
/// [`SsaError::EmptyGraph`] when the graph has no blocks.
pub fn compute_dominators(cfg: &ControlFlowGraph) -> SsaResult<Dominators> {
    let entry = cfg.entry_block().ok_or(SsaError::EmptyGraph)?;

    let all_blocks: DominatorSet = cfg.nodes().collect();
    let mut sets: IndexVec<BasicBlockId, DominatorSet> =
        cfg.nodes().map(|_| all_blocks.clone()).collect();
    sets[entry] = std::iter::once(entry).collect();

    let mut passes = 0;
    let mut changed = true;
    while changed {
        changed = false;
        passes += 1;

        for block in cfg.nodes() {
            if block == entry {
                continue;
            }

            let Some((first, rest)) = cfg.predecessors(block).split_first() else {
                continue;
            };

            let mut new_set = sets[*first].clone();
            for pred in rest {
                new_set.retain(|candidate| sets[*pred].contains(candidate));
            }
            new_set.insert(block);

            if new_set != sets[block] {
                log::trace!(
                    "dom({}) shrinks from {} to {} blocks",
                    cfg.label(block),
                    sets[block].len(),
                    new_set.len()
                );
                sets[block] = new_set;
                changed = true;
            }
        }
    }

    let reachable = cfg.reachable_blocks();
    if reachable.len() < cfg.len() {
        log::debug!(
            "{} of {} blocks are unreachable from {}; their dominator sets are not meaningful",
            cfg.len() - reachable.len(),
            cfg.len(),
            cfg.label(entry)
        );
    }
    log::debug!(
        "dominator fixpoint reached after {} passes over {} blocks",
        passes,
        cfg.len()
    );

    Ok(Dominators {
        entry,
        sets,
        reachable,
        passes,
    })
}

/// Computes the immediate dominator of every reachable, non-entry block.
///
/// The immediate dominator of `n` is the unique proper dominator of `n` that
/// is dominated by all other proper dominators of `n`. The entry and the
/// unreachable blocks have no entry in the returned tree.
pub fn compute_immediate_dominators(
    cfg: &ControlFlowGraph,
    dominators: &Dominators,
) -> DominatorTree {
    let mut idom = DominatorTree::default();

    for block in cfg.nodes() {
        if block == dominators.entry() || !dominators.is_reachable(block) {
            continue;
        }

        let proper: Vec<BasicBlockId> = dominators
            .dominators_of(block)
            .iter()
            .copied()
            .filter(|candidate| *candidate != block)
            .collect();

        let immediate = proper.iter().copied().find(|candidate| {
            proper
                .iter()
                .all(|other| dominators.dominates(*other, *candidate))
        });

        if let Some(immediate) = immediate {
            idom.insert(block, immediate);
        }
    }

    idom
}
