//! # SSA Construction
//!
//! Drives the analyses and the placement pass over one control-flow graph.
//! Everything is computed before the graph is touched: on error the graph is
//! left exactly as it was.

use crate::analysis::{compute_dominance_frontiers, compute_dominators};
use crate::passes::phi_placement::insert_phi_functions;
use crate::{ControlFlowGraph, SsaConfig, SsaResult};

/// Statistics reported by [`construct_ssa_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsaStats {
    pub blocks: usize,
    pub unreachable_blocks: usize,
    pub dominator_passes: usize,
    pub frontier_edges: usize,
    pub phi_functions_inserted: usize,
}

/// Places phi functions in `cfg` using the default configuration.
pub fn construct_ssa(cfg: &mut ControlFlowGraph) -> SsaResult<()> {
    construct_ssa_with(cfg, &SsaConfig::default()).map(|_| ())
}

/// Computes dominators and dominance frontiers of `cfg`, then places phi
/// functions unless `config.insert_phis` is false.
pub fn construct_ssa_with(cfg: &mut ControlFlowGraph, config: &SsaConfig) -> SsaResult<SsaStats> {
    let dominators = compute_dominators(cfg)?;
    let frontiers = compute_dominance_frontiers(cfg, &dominators, config.frontier_walk);

    let mut stats = SsaStats {
        blocks: cfg.len(),
        unreachable_blocks: cfg
            .nodes()
            .filter(|block| !dominators.is_reachable(*block))
            .count(),
        dominator_passes: dominators.passes(),
        frontier_edges: frontiers.edge_count(),
        phi_functions_inserted: 0,
    };

    if config.insert_phis {
        stats.phi_functions_inserted = insert_phi_functions(cfg, &frontiers);
    }

    log::debug!("SSA construction finished: {:?}", stats);
    Ok(stats)
}
