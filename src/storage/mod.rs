//! Results persistence module

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, to_string_pretty};

use crate::cluster::metrics::summarize_clusters;
use crate::cluster::{Cluster, ClusteringOutcome};
use crate::config::Config;
use crate::graph::{Graph, NodeId};

/// Save analysis results to the specified directory
pub fn save_results<N>(
    outcome: &ClusteringOutcome<N>,
    graph: &Graph<N>,
    config: &Config,
    output_dir: &Path,
) -> Result<()>
where
    N: NodeId + Display + Serialize,
{
    log::info!(
        "Saving {} clusters to {}",
        outcome.clusters.len(),
        output_dir.display()
    );

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    save_summary(outcome, graph, config, output_dir)?;
    save_clusters(&outcome.clusters, output_dir)?;
    save_cluster_stats_csv(&outcome.clusters, output_dir)?;
    save_nodes_csv(&outcome.clusters, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary<N: NodeId>(
    outcome: &ClusteringOutcome<N>,
    graph: &Graph<N>,
    config: &Config,
    output_dir: &Path,
) -> Result<()> {
    let summary = summarize_clusters(&outcome.clusters);
    let node_count = graph.node_count();
    let avg_degree = if node_count == 0 {
        0.0
    } else {
        graph.half_edge_count() as f64 / node_count as f64
    };

    let json = json!({
        "thresholds": {
            "density_threshold": config.density_threshold,
            "cp_threshold": config.cp_threshold,
        },
        "graph_stats": {
            "node_count": node_count,
            "edge_count": graph.edge_count(),
            "avg_degree": avg_degree,
        },
        "cluster_stats": {
            "cluster_count": summary.cluster_count,
            "total_clustered_nodes": summary.total_clustered_nodes,
            "largest_cluster_size": summary.largest_cluster,
            "avg_cluster_size": summary.avg_cluster_size,
            "avg_density": summary.avg_density,
            "discarded_cluster_count": outcome.discarded.len(),
            "unclustered_node_count": outcome.lost_nodes().len(),
            "candidate_evaluations": outcome.evaluations,
        }
    });

    write_file(&output_dir.join("summary.json"), to_string_pretty(&json)?.as_bytes())
}

/// Save every accepted cluster with its members
fn save_clusters<N: Serialize>(clusters: &[Cluster<N>], output_dir: &Path) -> Result<()> {
    let json = json!({ "clusters": clusters });
    write_file(&output_dir.join("clusters.json"), to_string_pretty(&json)?.as_bytes())
}

/// One row per cluster for external plotting tools
fn save_cluster_stats_csv<N>(clusters: &[Cluster<N>], output_dir: &Path) -> Result<()> {
    let path = output_dir.join("cluster_stats.csv");
    let mut file = BufWriter::new(create_file(&path)?);

    writeln!(file, "cluster_id,size,edge_count,density,total_weight")?;
    for cluster in clusters {
        writeln!(
            file,
            "{},{},{},{:.6},{}",
            cluster.id, cluster.size, cluster.edge_count, cluster.density, cluster.total_weight
        )?;
    }

    file.flush()?;
    Ok(())
}

/// Node to cluster assignment
fn save_nodes_csv<N: Display>(clusters: &[Cluster<N>], output_dir: &Path) -> Result<()> {
    let path = output_dir.join("nodes.csv");
    let mut file = BufWriter::new(create_file(&path)?);

    writeln!(file, "node,cluster_id")?;
    for cluster in clusters {
        for node in &cluster.members {
            writeln!(file, "{},{}", node, cluster.id)?;
        }
    }

    file.flush()?;
    Ok(())
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create {}", path.display()))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = create_file(path)?;
    file.write_all(contents)
        .with_context(|| format!("Failed to write {}", path.display()))
}
