//! Text presentation of clustering results

use std::fmt::{Display, Write as _};
use std::io::{BufRead, Write};

use anyhow::Result;
use itertools::Itertools;

use crate::cluster::Cluster;

/// Per-cluster node count, edge count and density
pub fn format_cluster_statistics<N>(clusters: &[Cluster<N>]) -> String {
    let mut out = String::new();
    for (i, cluster) in clusters.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Cluster {}:", i + 1);
        let _ = writeln!(out, "  Number of nodes: {}", cluster.size);
        let _ = writeln!(out, "  Number of edges: {}", cluster.edge_count);
        let _ = writeln!(out, "  Density: {:.4}", cluster.density);
        let _ = writeln!(out);
    }
    out
}

/// Members of every cluster, one line per cluster
pub fn format_cluster_nodes<N: Display>(clusters: &[Cluster<N>]) -> String {
    let mut out = String::from("Nodes in all clusters:\n");
    for (i, cluster) in clusters.iter().enumerate() {
        let _ = writeln!(out, "Cluster {}: {}", i + 1, cluster.members.iter().join(" "));
    }
    out
}

/// Interactive menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Statistics,
    Nodes,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Statistics),
            "2" => Some(MenuChoice::Nodes),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nSelect an option:\n\
                    1. Display Cluster Statistics\n\
                    2. Display Cluster Nodes\n\
                    3. Exit\n\
                    Enter your choice: ";

/// Prompt for display choices until the user exits or input runs out
pub fn run_menu<N, R, W>(clusters: &[Cluster<N>], input: R, mut output: W) -> Result<()>
where
    N: Display,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "{}", MENU)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(output)?;
                return Ok(());
            }
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Statistics) => write!(output, "{}", format_cluster_statistics(clusters))?,
            Some(MenuChoice::Nodes) => write!(output, "{}", format_cluster_nodes(clusters))?,
            Some(MenuChoice::Exit) => {
                writeln!(output, "Exiting program.")?;
                return Ok(());
            }
            None => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}
