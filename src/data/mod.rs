//! Input loading for graph data

pub mod edge_list;

pub use edge_list::{load_graph, load_graph_from_file, parse_edge_line, EdgeRecord, LoadStats};
