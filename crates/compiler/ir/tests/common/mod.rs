//! Shared helpers for the IR integration tests

#![allow(dead_code)]

use chiron_compiler_ir::{BasicBlockId, ControlFlowGraph};

pub fn bb(index: usize) -> BasicBlockId {
    BasicBlockId::from_usize(index)
}

/// Creates `count` blocks labelled `B0..B{count-1}` and wires `edges`
pub fn cfg_from_edges(count: usize, edges: &[(usize, usize)]) -> ControlFlowGraph {
    let mut cfg = ControlFlowGraph::new();
    for index in 0..count {
        cfg.add_block(format!("B{index}"));
    }
    for &(pred, succ) in edges {
        cfg.connect(bb(pred), bb(succ));
    }
    cfg
}

/// Blocks reachable from the entry when `removed` is taken out of the graph
pub fn reachable_without(cfg: &ControlFlowGraph, removed: BasicBlockId) -> Vec<bool> {
    let mut seen = vec![false; cfg.len()];
    let Some(entry) = cfg.entry_block() else {
        return seen;
    };
    if entry == removed {
        return seen;
    }

    let mut stack = vec![entry];
    while let Some(block) = stack.pop() {
        if seen[block.index()] {
            continue;
        }
        seen[block.index()] = true;
        for &succ in cfg.successors(block) {
            if succ != removed {
                stack.push(succ);
            }
        }
    }
    seen
}
