//! Graph construction module

use std::collections::BTreeSet;

use crate::graph::{Graph, NodeId};

/// Builder for incrementally constructing a `Graph` during the load phase.
///
/// Tracks how many edges repeat an already-seen pair so the caller can be
/// warned that densities may exceed 1.
pub struct GraphBuilder<N: Ord> {
    /// Graph under construction
    graph: Graph<N>,

    /// Distinct undirected pairs, smaller endpoint first
    pairs: BTreeSet<(N, N)>,

    /// Edges repeating a pair already present
    parallel_edges: usize,

    /// Edges whose endpoints coincide
    self_loops: usize,
}

/// Counters gathered while building a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub edges_added: usize,
    pub distinct_pairs: usize,
    pub parallel_edges: usize,
    pub self_loops: usize,
}

impl<N: NodeId> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> GraphBuilder<N> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            pairs: BTreeSet::new(),
            parallel_edges: 0,
            self_loops: 0,
        }
    }

    /// Add an undirected edge. Repeated pairs are kept, not merged.
    pub fn add_edge(&mut self, u: N, v: N, weight: f64) {
        if u == v {
            self.self_loops += 1;
        }

        let key = if u <= v {
            (u.clone(), v.clone())
        } else {
            (v.clone(), u.clone())
        };
        if !self.pairs.insert(key) {
            self.parallel_edges += 1;
        }

        self.graph.add_edge(u, v, weight);
    }

    pub fn stats(&self) -> BuildStats {
        BuildStats {
            edges_added: self.pairs.len() + self.parallel_edges,
            distinct_pairs: self.pairs.len(),
            parallel_edges: self.parallel_edges,
            self_loops: self.self_loops,
        }
    }

    /// Finish the load phase and hand out the read-only graph
    pub fn build(self) -> (Graph<N>, BuildStats) {
        let stats = self.stats();

        if stats.parallel_edges > 0 {
            log::warn!(
                "{} parallel edges repeat an existing pair; cluster densities may exceed 1.0",
                stats.parallel_edges
            );
        }
        if stats.self_loops > 0 {
            log::debug!("{} self-loops stored; they never count towards density", stats.self_loops);
        }

        log::info!(
            "Built graph with {} nodes and {} edges",
            self.graph.node_count(),
            stats.edges_added
        );

        (self.graph, stats)
    }
}

/// Populate a graph from `(source, target, weight)` triples, one edge per triple
pub fn load_edges<N, I>(edges: I) -> Graph<N>
where
    N: NodeId,
    I: IntoIterator<Item = (N, N, f64)>,
{
    let mut builder = GraphBuilder::new();
    for (source, target, weight) in edges {
        builder.add_edge(source, target, weight);
    }
    builder.build().0
}
