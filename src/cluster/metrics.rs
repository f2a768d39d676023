//! Cluster statistics and metrics

use std::collections::BTreeSet;

use crate::cluster::Cluster;
use crate::error::ClusterResult;
use crate::graph::{Graph, NodeId};

/// Number of central nodes reported per cluster
const CENTRAL_NODE_COUNT: usize = 5;

/// Freeze a member set into a `Cluster` carrying its display statistics
pub fn summarize_cluster<N: NodeId>(
    graph: &Graph<N>,
    id: usize,
    members: BTreeSet<N>,
) -> ClusterResult<Cluster<N>> {
    let edge_count = graph.intra_edge_count(&members)?;
    let total_weight = graph.intra_edge_weight(&members)?;
    let density = graph.density(&members)?;
    let central_nodes = central_nodes(graph, &members)?;

    Ok(Cluster {
        id,
        size: members.len(),
        members,
        edge_count,
        total_weight,
        density,
        central_nodes,
    })
}

/// Members with the highest intra-cluster degree.
///
/// Ties keep ascending node order, so the result is deterministic.
pub fn central_nodes<N: NodeId>(graph: &Graph<N>, members: &BTreeSet<N>) -> ClusterResult<Vec<N>> {
    let mut degrees: Vec<(&N, usize)> = Vec::with_capacity(members.len());
    for node in members {
        degrees.push((node, graph.internal_degree(node, members)?));
    }

    // Stable sort keeps the ascending member order among equal degrees.
    degrees.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(degrees
        .into_iter()
        .take(CENTRAL_NODE_COUNT)
        .map(|(node, _)| node.clone())
        .collect())
}

/// Aggregate figures over a list of accepted clusters
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClusterSummary {
    pub cluster_count: usize,
    pub total_clustered_nodes: usize,
    pub largest_cluster: usize,
    pub avg_cluster_size: f64,
    pub avg_density: f64,
}

pub fn summarize_clusters<N>(clusters: &[Cluster<N>]) -> ClusterSummary {
    if clusters.is_empty() {
        return ClusterSummary::default();
    }

    let count = clusters.len() as f64;
    let total_clustered_nodes: usize = clusters.iter().map(|c| c.size).sum();

    ClusterSummary {
        cluster_count: clusters.len(),
        total_clustered_nodes,
        largest_cluster: clusters.iter().map(|c| c.size).max().unwrap_or(0),
        avg_cluster_size: total_clustered_nodes as f64 / count,
        avg_density: clusters.iter().map(|c| c.density).sum::<f64>() / count,
    }
}
