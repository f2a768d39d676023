//! Ordered adjacency-list representation of an undirected weighted graph

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ClusterError, ClusterResult};
use crate::graph::NodeId;

/// One direction of an undirected connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<N> {
    pub source: N,
    pub target: N,
    pub weight: f64,
}

/// Undirected graph stored as pairs of half-edges.
///
/// Every `add_edge(u, v, w)` stores `u -> v` and `v -> u` with the same weight.
/// Repeated calls for the same pair are kept as parallel half-edges. Nodes are
/// kept in an ordered map so every traversal runs in ascending node order.
#[derive(Debug, Clone)]
pub struct Graph<N: Ord> {
    adjacency: BTreeMap<N, Vec<WeightedEdge<N>>>,
}

impl<N: Ord> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the undirected edge `u -- v` as two half-edges
    pub fn add_edge(&mut self, u: N, v: N, weight: f64) {
        self.adjacency
            .entry(u.clone())
            .or_default()
            .push(WeightedEdge {
                source: u.clone(),
                target: v.clone(),
                weight,
            });
        self.adjacency.entry(v.clone()).or_default().push(WeightedEdge {
            source: v,
            target: u,
            weight,
        });
    }

    /// Half-edges leaving `node`
    pub fn neighbors(&self, node: &N) -> ClusterResult<&[WeightedEdge<N>]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| ClusterError::node_not_found(node))
    }

    /// All node identifiers in ascending order
    pub fn all_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored half-edges (twice the number of `add_edge` calls)
    pub fn half_edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Number of undirected edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.half_edge_count() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of intra-set undirected edges.
    ///
    /// An edge is counted only from its smaller endpoint, so each undirected
    /// edge between two members is seen once. Self-loops never count.
    pub fn intra_edge_count(&self, members: &BTreeSet<N>) -> ClusterResult<usize> {
        let mut count = 0;
        for node in members {
            for edge in self.neighbors(node)? {
                if node < &edge.target && members.contains(&edge.target) {
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    /// Sum of weights over the edges counted by `intra_edge_count`
    pub fn intra_edge_weight(&self, members: &BTreeSet<N>) -> ClusterResult<f64> {
        let mut total = 0.0;
        for node in members {
            for edge in self.neighbors(node)? {
                if node < &edge.target && members.contains(&edge.target) {
                    total += edge.weight;
                }
            }
        }
        Ok(total)
    }

    /// Intra-set edges over the maximum possible `n * (n - 1) / 2`.
    ///
    /// Sets with fewer than two members have density 0.
    pub fn density(&self, members: &BTreeSet<N>) -> ClusterResult<f64> {
        let n = members.len();
        if n < 2 {
            return Ok(0.0);
        }
        let max_edges = (n * (n - 1)) as f64 / 2.0;
        Ok(self.intra_edge_count(members)? as f64 / max_edges)
    }

    /// Fraction of the set, excluding the candidate, that the candidate links to.
    ///
    /// Returns `None` when the candidate is not part of the graph.
    pub fn periphery_ratio(&self, candidate: &N, members: &BTreeSet<N>) -> Option<f64> {
        let edges = self.adjacency.get(candidate)?;
        let connections = edges
            .iter()
            .filter(|edge| &edge.target != candidate && members.contains(&edge.target))
            .count();
        let denominator = members.len().saturating_sub(1).max(1);
        Some(connections as f64 / denominator as f64)
    }

    /// Whether the candidate is linked to enough of the set.
    ///
    /// A candidate absent from the graph never qualifies, even at threshold 0.
    pub fn is_in_periphery(&self, candidate: &N, members: &BTreeSet<N>, threshold: f64) -> bool {
        self.periphery_ratio(candidate, members)
            .map_or(false, |ratio| ratio >= threshold)
    }

    /// Degree of `node` counting only neighbors inside `members`
    pub fn internal_degree(&self, node: &N, members: &BTreeSet<N>) -> ClusterResult<usize> {
        Ok(self
            .neighbors(node)?
            .iter()
            .filter(|edge| &edge.target != node && members.contains(&edge.target))
            .count())
    }
}
