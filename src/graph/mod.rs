//! Graph representation and load-phase construction

pub mod adjacency;
pub mod builder;

pub use adjacency::{Graph, WeightedEdge};
pub use builder::{load_edges, BuildStats, GraphBuilder};

use std::fmt::Debug;

/// Requirements on a node identifier: a total order for deterministic
/// traversal, plus cloning and debug output for cluster membership and errors.
pub trait NodeId: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> NodeId for T {}
