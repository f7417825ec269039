//! # Testing Utilities for the IR
//!
//! Hand-built control-flow graphs shared by the unit tests of this crate.
//! Blocks are labelled `B0`, `B1`, ... in creation order unless noted.

use chiron_compiler_ast::{Expression, Instruction};

use crate::{BasicBlockId, ControlFlowGraph};

/// Creates `count` blocks labelled `B0..B{count-1}` and wires `edges`
pub fn cfg_from_edges(count: usize, edges: &[(usize, usize)]) -> ControlFlowGraph {
    let mut cfg = ControlFlowGraph::new();
    for index in 0..count {
        cfg.add_block(format!("B{index}"));
    }
    for &(pred, succ) in edges {
        cfg.connect(BasicBlockId::from_usize(pred), BasicBlockId::from_usize(succ));
    }
    cfg
}

/// `x = <value>`
pub fn assign(var: &str, value: i64) -> Instruction {
    Instruction::assign(var, Expression::num(value))
}

/// Linear CFG: B0 -> B1 -> B2
pub fn create_linear_cfg() -> ControlFlowGraph {
    cfg_from_edges(3, &[(0, 1), (1, 2)])
}

/// If-else diamond:
///
/// ```text
///     B0
///    /  \
///   B1  B2
///    \  /
///     B3
/// ```
pub fn create_diamond_cfg() -> ControlFlowGraph {
    cfg_from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])
}

/// Loop with a header:
///
/// ```text
///   B0
///   |
///   B1 <--
///   | \   |
///   |  B2-
///   B3
/// ```
pub fn create_loop_cfg() -> ControlFlowGraph {
    cfg_from_edges(4, &[(0, 1), (1, 2), (2, 1), (1, 3)])
}

/// Nested if:
///
/// ```text
///        B0
///       /  \
///     B1    B2
///    /  \    |
///   B3  B4   |
///    \  |   /
///       B5
/// ```
pub fn create_nested_if_cfg() -> ControlFlowGraph {
    cfg_from_edges(6, &[(0, 1), (0, 2), (1, 3), (1, 4), (3, 5), (4, 5), (2, 5)])
}
