//! # IR Passes
//!
//! This module implements the passes that can be applied to a control-flow
//! graph, and the manager that runs them in sequence.

pub mod phi_placement;


use crate::{construct_ssa_with, ControlFlowGraph, SsaConfig, SsaResult, SsaStats};

/// A trait for passes over a control-flow graph
pub trait IrPass {
    /// Apply this pass to a graph
    /// Returns true if the graph was modified
    fn run(&mut self, cfg: &mut ControlFlowGraph) -> SsaResult<bool>;

    /// Get the name of this pass for debugging
    fn name(&self) -> &'static str;
}

/// SSA Construction Pass
///
/// Computes dominators and dominance frontiers, then places phi functions
/// at the frontiers of every assignment.
///
/// ### Before:
/// ```text
/// B0:
///   (x < 3)
///   -> B1, B2
/// B1:  ; preds: B0
///   x = 1
///   -> B3
/// B2:  ; preds: B0
///   x = 2
///   -> B3
/// B3:  ; preds: B1, B2
///   forward x
/// ```
///
/// ### After:
/// ```text
/// B3:  ; preds: B1, B2
///   forward x
///   x = φ()
/// ```
#[derive(Debug, Default)]
pub struct SsaConstruction {
    config: SsaConfig,
    stats: Option<SsaStats>,
}

impl SsaConstruction {
    /// Create a new pass with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new pass with the given configuration
    pub fn with_config(config: SsaConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Statistics of the last successful run
    pub const fn stats(&self) -> Option<&SsaStats> {
        self.stats.as_ref()
    }
}

impl IrPass for SsaConstruction {
    fn run(&mut self, cfg: &mut ControlFlowGraph) -> SsaResult<bool> {
        self.stats = None;
        let stats = construct_ssa_with(cfg, &self.config)?;
        let modified = stats.phi_functions_inserted > 0;
        self.stats = Some(stats);
        Ok(modified)
    }

    fn name(&self) -> &'static str {
        "SsaConstruction"
    }
}

/// Pass manager for running multiple passes in order
#[derive(Default)]
pub struct PassManager {
    passes: Vec<Box<dyn IrPass>>,
}

impl PassManager {
    /// Create a new pass manager
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Add a pass to the manager
    pub fn add_pass<P: IrPass + 'static>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Run all passes on the graph
    /// Returns true if any pass modified the graph. Stops at the first pass
    /// that fails and returns its error.
    pub fn run(&mut self, cfg: &mut ControlFlowGraph) -> SsaResult<bool> {
        let mut modified = false;

        for pass in &mut self.passes {
            if pass.run(cfg)? {
                modified = true;
                log::debug!("Pass '{}' modified the graph", pass.name());
            }
        }

        Ok(modified)
    }

    /// Number of registered passes
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Create the pipeline preparing a graph for SSA renaming
    pub fn ssa_pipeline(config: SsaConfig) -> Self {
        Self::new().add_pass(SsaConstruction::with_config(config))
    }
}
