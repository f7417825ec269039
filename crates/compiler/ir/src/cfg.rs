//! # Control Flow Graph
//!
//! Arena-backed control-flow graph. Blocks live in an `IndexVec` and refer to
//! each other through [`BasicBlockId`] lists, so the graph may contain cycles
//! without any ownership cycles.
//!
//! The graph is filled in by the CFG builder; the analyses in this crate only
//! read its shape and append statements to its blocks.

use chiron_compiler_ast::Instruction;
use index_vec::IndexVec;
use rustc_hash::FxHashSet;

use crate::{indent_str, BasicBlock, BasicBlockId, PhiFunction, PrettyPrint, Statement};

/// A control-flow graph whose first block is the entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlFlowGraph {
    /// All basic blocks, in insertion order
    pub basic_blocks: IndexVec<BasicBlockId, BasicBlock>,
}

impl ControlFlowGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self {
            basic_blocks: IndexVec::new(),
        }
    }

    /// Adds a block and returns its id. The first block added is the entry.
    pub fn add_block(&mut self, label: impl Into<String>) -> BasicBlockId {
        self.basic_blocks.push(BasicBlock::new(label))
    }

    /// Returns the entry block, or `None` for an empty graph
    pub fn entry_block(&self) -> Option<BasicBlockId> {
        if self.basic_blocks.is_empty() {
            None
        } else {
            Some(BasicBlockId::from_raw(0))
        }
    }

    /// Returns the ids of all blocks, entry first
    pub fn nodes(&self) -> impl Iterator<Item = BasicBlockId> + '_ {
        self.basic_blocks.indices()
    }

    pub fn len(&self) -> usize {
        self.basic_blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basic_blocks.is_empty()
    }

    /// Returns the block with the given id
    ///
    /// Panics if the block does not belong to this graph.
    pub fn block(&self, id: BasicBlockId) -> &BasicBlock {
        self.basic_blocks
            .get(id)
            .unwrap_or_else(|| panic!("Block {:?} not found", id))
    }

    /// Returns the block with the given id, mutably
    ///
    /// Panics if the block does not belong to this graph.
    pub fn block_mut(&mut self, id: BasicBlockId) -> &mut BasicBlock {
        self.basic_blocks
            .get_mut(id)
            .unwrap_or_else(|| panic!("Block {:?} not found", id))
    }

    /// Returns the display label of a block
    pub fn label(&self, id: BasicBlockId) -> &str {
        &self.block(id).label
    }

    /// Returns the blocks with an edge into `id`
    pub fn predecessors(&self, id: BasicBlockId) -> &[BasicBlockId] {
        &self.block(id).preds
    }

    /// Returns the blocks `id` has an edge to
    pub fn successors(&self, id: BasicBlockId) -> &[BasicBlockId] {
        &self.block(id).succs
    }

    /// Adds the edge `pred -> succ`, updating both adjacency lists.
    ///
    /// Adding an edge that already exists has no effect.
    pub fn connect(&mut self, pred: BasicBlockId, succ: BasicBlockId) {
        assert!(
            self.basic_blocks.get(pred).is_some(),
            "Predecessor block {:?} does not exist",
            pred
        );
        self.block_mut(succ).add_pred(pred);
        self.block_mut(pred).add_succ(succ);
    }

    /// Appends an instruction to a block and returns its position
    pub fn push_instruction(&mut self, id: BasicBlockId, instruction: Instruction) -> usize {
        self.block_mut(id).push_statement(instruction)
    }

    /// Appends a statement to a block and returns its position
    pub fn push_statement(&mut self, id: BasicBlockId, statement: impl Into<Statement>) -> usize {
        self.block_mut(id).push_statement(statement)
    }

    /// Returns the phi functions of a block, in insertion order
    pub fn phi_functions(&self, id: BasicBlockId) -> impl Iterator<Item = &PhiFunction> {
        self.block(id).phi_functions()
    }

    /// Returns the total number of phi functions in the graph
    pub fn phi_count(&self) -> usize {
        self.basic_blocks
            .iter()
            .map(|block| block.phi_functions().count())
            .sum()
    }

    /// Returns every block reachable from the entry (empty for an empty graph)
    pub fn reachable_blocks(&self) -> FxHashSet<BasicBlockId> {
        let mut visited = FxHashSet::default();
        let Some(entry) = self.entry_block() else {
            return visited;
        };

        let mut stack = vec![entry];
        while let Some(current) = stack.pop() {
            if visited.insert(current) {
                stack.extend(self.successors(current).iter().copied());
            }
        }

        visited
    }

    /// Renders a statement, resolving phi predecessors to block labels
    pub fn render_statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Instr(instruction) => instruction.to_string(),
            Statement::Phi(phi) => phi.render(self),
        }
    }

    fn labels(&self, ids: &[BasicBlockId]) -> String {
        ids.iter()
            .map(|id| self.label(*id))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PrettyPrint for ControlFlowGraph {
    fn pretty_print(&self, indent: usize) -> String {
        let mut result = String::new();
        let base_indent = indent_str(indent);
        let body_indent = indent_str(indent + 1);

        for block in self.basic_blocks.iter() {
            result.push_str(&format!("{}{}:", base_indent, block.label));
            if !block.preds.is_empty() {
                result.push_str(&format!("  ; preds: {}", self.labels(&block.preds)));
            }
            result.push('\n');

            for (statement, _) in &block.instructions {
                result.push_str(&format!(
                    "{}{}\n",
                    body_indent,
                    self.render_statement(statement)
                ));
            }

            if !block.succs.is_empty() {
                result.push_str(&format!(
                    "{}-> {}\n",
                    body_indent,
                    self.labels(&block.succs)
                ));
            }
        }

        result
    }
}
