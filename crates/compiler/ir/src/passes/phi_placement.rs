//! # Phi Placement
//!
//! Inserts phi functions at the dominance frontiers of every assignment.
//!
//! ## Algorithm
//! For every block N, for every block F in DF(N), for every assignment in N
//! (program order) whose target has no phi in F yet: append a phi for the
//! target at the end of F.
//!
//! Placement is frontier-driven, not use-driven: a phi is placed even when
//! only one incoming path defines the variable, or when the variable is
//! never read after the join. Phi arguments are left empty and no variable
//! is renamed.

use rustc_hash::FxHashSet;

use crate::analysis::DominanceFrontiers;
use crate::{ControlFlowGraph, PhiFunction};

/// Appends phi functions for the assignments of every block to the blocks of
/// its dominance frontier. Returns the number of phi functions inserted.
///
/// A block never receives two phi functions for the same variable, so
/// running the placement again over an already annotated graph inserts
/// nothing.
pub fn insert_phi_functions(cfg: &mut ControlFlowGraph, frontiers: &DominanceFrontiers) -> usize {
    let mut inserted = 0;

    for (block, frontier) in frontiers.iter() {
        if frontier.is_empty() {
            continue;
        }

        let targets = cfg.block(block).assigned_variables();
        if targets.is_empty() {
            continue;
        }

        for &frontier_block in frontier {
            let mut covered: FxHashSet<String> = cfg.block(frontier_block).phi_variables();

            for var in &targets {
                if covered.contains(var) {
                    continue;
                }

                let position = cfg.push_statement(frontier_block, PhiFunction::new(var.as_str()));
                covered.insert(var.clone());
                inserted += 1;

                log::debug!(
                    "placed phi for `{}` in {} at position {} (assigned in {})",
                    var,
                    cfg.label(frontier_block),
                    position,
                    cfg.label(block)
                );
            }
        }
    }

    inserted
}
