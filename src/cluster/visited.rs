//! Per-run visited markers shared by every expansion of one clustering call

use std::collections::BTreeMap;

use crate::graph::{Graph, NodeId};

/// Visited flag for every node of a graph.
///
/// Created once per clustering run with every node unvisited. Expansion marks
/// seeds and candidates, and clears a candidate again when it is rejected.
#[derive(Debug, Clone)]
pub struct VisitedSet<N: Ord> {
    flags: BTreeMap<N, bool>,
}

impl<N: NodeId> VisitedSet<N> {
    pub fn for_graph(graph: &Graph<N>) -> Self {
        Self {
            flags: graph.all_nodes().map(|node| (node.clone(), false)).collect(),
        }
    }

    /// Unknown nodes read as unvisited
    pub fn is_visited(&self, node: &N) -> bool {
        self.flags.get(node).copied().unwrap_or(false)
    }

    pub fn mark(&mut self, node: &N) {
        self.set(node, true);
    }

    pub fn unmark(&mut self, node: &N) {
        self.set(node, false);
    }

    fn set(&mut self, node: &N, value: bool) {
        match self.flags.get_mut(node) {
            Some(flag) => *flag = value,
            None => {
                self.flags.insert(node.clone(), value);
            }
        }
    }

    pub fn visited_count(&self) -> usize {
        self.flags.values().filter(|&&flag| flag).count()
    }

    pub fn unvisited_count(&self) -> usize {
        self.flags.len() - self.visited_count()
    }
}
