//! Cluster analysis module

pub mod detection;
pub mod expansion;
pub mod metrics;
pub mod visited;

use std::collections::BTreeSet;

use serde::Serialize;

pub use detection::{cluster_graph, perform_clustering, ClusteringOutcome};
pub use expansion::{CandidateEvaluation, ClusterExpander, ExpansionReport};
pub use visited::VisitedSet;

/// An accepted cluster together with the statistics shown to the analyst
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster<N> {
    /// Position in discovery order, starting at 1
    pub id: usize,

    /// Members of this cluster in ascending order
    pub members: BTreeSet<N>,

    /// Number of members
    pub size: usize,

    /// Undirected edges with both endpoints inside the cluster
    pub edge_count: usize,

    /// Summed weight of those edges (reported only, never used for acceptance)
    pub total_weight: f64,

    /// Density: actual edges / potential edges
    pub density: f64,

    /// Members with the highest intra-cluster degree
    pub central_nodes: Vec<N>,
}

impl<N> Cluster<N> {
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<N: Ord> Cluster<N> {
    pub fn contains(&self, node: &N) -> bool {
        self.members.contains(node)
    }
}
