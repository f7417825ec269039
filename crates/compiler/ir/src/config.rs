//! Configuration for SSA construction

/// How the frontier walk climbs from a join predecessor towards the join's
/// dominators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrontierWalk {
    /// Step to the immediate dominator of the current block
    #[default]
    ImmediateDominator,

    /// Step to the lowest-numbered proper dominator of the current block.
    ///
    /// The entry is `bb0` and dominates every reachable block, so this walk
    /// always jumps from the join predecessor straight to the entry. Only
    /// the predecessor itself is recorded; the blocks between it and the
    /// entry on the dominator chain are skipped, which under-approximates
    /// their frontiers.
    ArbitraryDominator,
}

/// Configuration for [`crate::construct_ssa_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsaConfig {
    /// Strategy of the dominance-frontier walk
    pub frontier_walk: FrontierWalk,
    /// Whether to append phi functions, or only run the analyses
    pub insert_phis: bool,
}

impl Default for SsaConfig {
    fn default() -> Self {
        Self {
            frontier_walk: FrontierWalk::ImmediateDominator,
            insert_phis: true,
        }
    }
}

impl SsaConfig {
    /// Configuration reproducing the historical frontier walk
    pub fn historical() -> Self {
        Self {
            frontier_walk: FrontierWalk::ArbitraryDominator,
            ..Self::default()
        }
    }

    /// Configuration that computes dominance information without mutating
    /// the graph
    pub fn analysis_only() -> Self {
        Self {
            insert_phis: false,
            ..Self::default()
        }
    }
}
