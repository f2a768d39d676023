//! Error types for the clustering core

use thiserror::Error;

/// Failures surfaced by the graph and the clustering engine
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClusterError {
    /// A node was looked up that is not part of the graph
    #[error("node not found in graph: {0}")]
    NodeNotFound(String),

    /// A threshold parameter fell outside the closed unit interval
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

pub type ClusterResult<T> = std::result::Result<T, ClusterError>;

impl ClusterError {
    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        ClusterError::NodeNotFound(format!("{:?}", node))
    }
}
