//! # Phi Functions
//!
//! Synthetic pseudo-instructions merging the definitions of one variable at a
//! control-flow join. They are never produced by the parser, only by SSA
//! construction.

use chiron_compiler_ast::Value;

use crate::{BasicBlockId, ControlFlowGraph};

/// A phi function for a single variable.
///
/// The function is owned by the block it was inserted into. Incoming edges
/// are referenced by predecessor id only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhiFunction {
    /// The variable merged at this point
    pub var: String,

    /// Value flowing in from each predecessor, in first-insertion order
    args: Vec<(BasicBlockId, Value)>,
}

impl PhiFunction {
    /// Creates a phi function with no incoming arguments yet
    pub fn new(var: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            args: Vec::new(),
        }
    }

    /// Records the value flowing in from `pred`.
    ///
    /// A second call for the same predecessor overwrites the previous value
    /// but keeps its position.
    pub fn add_argument(&mut self, pred: BasicBlockId, value: Value) {
        if let Some((_, existing)) = self.args.iter_mut().find(|(block, _)| *block == pred) {
            *existing = value;
        } else {
            self.args.push((pred, value));
        }
    }

    /// Returns the incoming value for `pred`, if one has been recorded
    pub fn argument(&self, pred: BasicBlockId) -> Option<&Value> {
        self.args
            .iter()
            .find(|(block, _)| *block == pred)
            .map(|(_, value)| value)
    }

    pub fn args(&self) -> &[(BasicBlockId, Value)] {
        &self.args
    }

    /// Renders the phi using the block labels of `cfg`, e.g. `x = φ(B1: x, B2: x)`
    pub fn render(&self, cfg: &ControlFlowGraph) -> String {
        let args = self
            .args
            .iter()
            .map(|(pred, value)| format!("{}: {}", cfg.label(*pred), value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} = φ({})", self.var, args)
    }
}

impl std::fmt::Display for PhiFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self
            .args
            .iter()
            .map(|(pred, value)| format!("{pred}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} = φ({})", self.var, args)
    }
}
