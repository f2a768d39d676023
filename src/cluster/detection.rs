//! Cluster detection driver

use std::collections::BTreeSet;

use crate::cluster::metrics::summarize_cluster;
use crate::cluster::{Cluster, ClusterExpander, VisitedSet};
use crate::config::Config;
use crate::error::ClusterResult;
use crate::graph::{Graph, NodeId};

/// Everything one clustering run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringOutcome<N> {
    /// Accepted clusters in discovery order
    pub clusters: Vec<Cluster<N>>,

    /// Finished clusters that missed the density floor. Their members stay
    /// visited and belong to no cluster.
    pub discarded: Vec<BTreeSet<N>>,

    /// Candidate evaluations performed across every expansion
    pub evaluations: usize,
}

impl<N: Ord> ClusteringOutcome<N> {
    /// Nodes that ended up in a discarded cluster
    pub fn lost_nodes(&self) -> BTreeSet<&N> {
        self.discarded.iter().flatten().collect()
    }
}

/// Partition the graph into accepted clusters.
///
/// Returns only the accepted clusters; see `cluster_graph` for the full outcome.
pub fn perform_clustering<N: NodeId>(
    graph: &Graph<N>,
    config: &Config,
) -> ClusterResult<Vec<Cluster<N>>> {
    cluster_graph(graph, config).map(|outcome| outcome.clusters)
}

/// Seed a cluster at every still-unvisited node in ascending order, grow it to
/// its fixed point, and keep it if its final density meets the threshold.
pub fn cluster_graph<N: NodeId>(
    graph: &Graph<N>,
    config: &Config,
) -> ClusterResult<ClusteringOutcome<N>> {
    config.validate()?;

    log::info!(
        "Clustering {} nodes (density threshold {}, cp threshold {})",
        graph.node_count(),
        config.density_threshold,
        config.cp_threshold
    );

    let expander = ClusterExpander::new(graph, config);
    let mut visited = VisitedSet::for_graph(graph);
    let mut outcome = ClusteringOutcome {
        clusters: Vec::new(),
        discarded: Vec::new(),
        evaluations: 0,
    };

    for seed in graph.all_nodes() {
        if visited.is_visited(seed) {
            continue;
        }

        visited.mark(seed);
        let mut members = BTreeSet::from([seed.clone()]);
        let report = expander.expand(&mut members, &mut visited)?;
        outcome.evaluations += report.evaluations.len();

        let density = graph.density(&members)?;
        if density >= config.density_threshold {
            let id = outcome.clusters.len() + 1;
            log::debug!(
                "Accepted cluster {} seeded at {:?}: {} nodes, density {:.4}, {} rounds",
                id,
                seed,
                members.len(),
                density,
                report.rounds
            );
            outcome.clusters.push(summarize_cluster(graph, id, members)?);
        } else {
            log::debug!(
                "Discarded cluster seeded at {:?}: {} nodes, density {:.4}",
                seed,
                members.len(),
                density
            );
            outcome.discarded.push(members);
        }
    }

    log::info!(
        "Found {} clusters; discarded {} ({} nodes left unclustered)",
        outcome.clusters.len(),
        outcome.discarded.len(),
        outcome.lost_nodes().len()
    );

    Ok(outcome)
}
