//! Density-threshold graph clustering
//!
//! Loads an undirected weighted edge list, grows clusters greedily from each
//! unvisited seed while density and periphery thresholds hold, and keeps the
//! clusters whose final density meets the threshold.

pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod report;
pub mod storage;

pub use anyhow::{anyhow, Result};
pub use cluster::{cluster_graph, perform_clustering, Cluster, ClusteringOutcome};
pub use config::Config;
pub use error::{ClusterError, ClusterResult};
pub use graph::{load_edges, Graph, NodeId, WeightedEdge};
