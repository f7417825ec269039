//! Property tests for dominators, frontiers and phi placement over random
//! graphs in which every block is reachable from the entry.

mod common;

use chiron_compiler_ast::{Expression, Instruction};
use chiron_compiler_ir::analysis::{
    compute_dominance_frontiers, compute_dominators, compute_immediate_dominators,
};
use chiron_compiler_ir::{construct_ssa, ControlFlowGraph, FrontierWalk};
use common::{bb, cfg_from_edges, reachable_without};
use proptest::prelude::*;
use proptest::sample::Index;

/// A spanning tree from the entry plus arbitrary extra edges
fn arb_cfg() -> impl Strategy<Value = ControlFlowGraph> {
    (1usize..9).prop_flat_map(|count| {
        let parents = prop::collection::vec(any::<Index>(), count - 1);
        let extra = prop::collection::vec((0..count, 0..count), 0..count * 2);
        (Just(count), parents, extra).prop_map(|(count, parents, extra)| {
            let mut edges: Vec<(usize, usize)> = parents
                .iter()
                .enumerate()
                .map(|(offset, parent)| (parent.index(offset + 1), offset + 1))
                .collect();
            edges.extend(extra);
            cfg_from_edges(count, &edges)
        })
    })
}

/// The same graph with a few assignments sprinkled over the blocks
fn arb_program() -> impl Strategy<Value = ControlFlowGraph> {
    (arb_cfg(), prop::collection::vec((any::<Index>(), 0usize..3), 0..12)).prop_map(
        |(mut cfg, assignments)| {
            let vars = ["a", "b", "c"];
            for (block, var) in assignments {
                let block = bb(block.index(cfg.len()));
                cfg.push_instruction(block, Instruction::assign(vars[var], Expression::num(1)));
            }
            cfg
        },
    )
}

proptest! {
    #[test]
    fn prop_entry_dominated_only_by_itself(cfg in arb_cfg()) {
        let doms = compute_dominators(&cfg).unwrap();
        let entry = cfg.entry_block().unwrap();
        prop_assert_eq!(doms.dominators_of(entry).len(), 1);
        prop_assert!(doms.dominates(entry, entry));
    }

    #[test]
    fn prop_dominator_sets_are_closed(cfg in arb_cfg()) {
        let doms = compute_dominators(&cfg).unwrap();
        for block in cfg.nodes() {
            prop_assert!(doms.dominates(block, block));
            prop_assert!(doms.is_reachable(block));
            for member in doms.dominators_of(block) {
                prop_assert!(member.index() < cfg.len());
            }
        }
    }

    #[test]
    fn prop_dominators_match_path_definition(cfg in arb_cfg()) {
        let doms = compute_dominators(&cfg).unwrap();
        for candidate in cfg.nodes() {
            let reachable = reachable_without(&cfg, candidate);
            for block in cfg.nodes() {
                let expected = candidate == block || !reachable[block.index()];
                prop_assert_eq!(
                    doms.dominates(candidate, block),
                    expected,
                    "dominates({}, {})",
                    candidate,
                    block
                );
            }
        }
    }

    #[test]
    fn prop_immediate_dominator_is_closest(cfg in arb_cfg()) {
        let doms = compute_dominators(&cfg).unwrap();
        let idom = compute_immediate_dominators(&cfg, &doms);
        for block in cfg.nodes().skip(1) {
            let immediate = idom[&block];
            prop_assert!(doms.strictly_dominates(immediate, block));
            for other in doms.dominators_of(block) {
                if *other != block {
                    prop_assert!(doms.dominates(*other, immediate));
                }
            }
        }
    }

    #[test]
    fn prop_immediate_walk_matches_definition(cfg in arb_cfg()) {
        let doms = compute_dominators(&cfg).unwrap();
        let frontiers = compute_dominance_frontiers(&cfg, &doms, FrontierWalk::ImmediateDominator);

        for x in cfg.nodes() {
            for n in cfg.nodes() {
                let preds = cfg.predecessors(n);
                let expected = preds.len() >= 2
                    && !doms.dominates(x, n)
                    && preds.iter().any(|p| doms.dominates(x, *p));
                prop_assert_eq!(frontiers.frontier(x).contains(&n), expected);
            }
        }
    }

    #[test]
    fn prop_arbitrary_walk_is_subset(cfg in arb_cfg()) {
        let doms = compute_dominators(&cfg).unwrap();
        let precise = compute_dominance_frontiers(&cfg, &doms, FrontierWalk::ImmediateDominator);
        let historical = compute_dominance_frontiers(&cfg, &doms, FrontierWalk::ArbitraryDominator);

        for block in cfg.nodes() {
            prop_assert!(historical.frontier(block).is_subset(precise.frontier(block)));
        }
    }

    #[test]
    fn prop_placement_is_idempotent(cfg in arb_program()) {
        let mut cfg = cfg;
        construct_ssa(&mut cfg).unwrap();
        let once = cfg.clone();
        construct_ssa(&mut cfg).unwrap();
        prop_assert_eq!(&cfg, &once);

        for block in cfg.nodes() {
            let mut vars: Vec<&str> = cfg.phi_functions(block).map(|phi| phi.var.as_str()).collect();
            let total = vars.len();
            vars.sort_unstable();
            vars.dedup();
            prop_assert_eq!(vars.len(), total);
        }
    }
}
