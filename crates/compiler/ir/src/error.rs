//! Errors surfaced by the SSA analyses.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SsaError {
    /// The graph has no blocks, so there is no start node to root the
    /// dominator computation at.
    #[error("cannot compute dominators of an empty control-flow graph")]
    EmptyGraph,
}

pub type SsaResult<T> = Result<T, SsaError>;
