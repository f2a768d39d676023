//! Whitespace-delimited edge list handling for graph data
//!
//! Each line holds `source target weight`. Lines that do not parse are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::graph::{BuildStats, Graph, GraphBuilder};

/// One parsed `source target weight` line
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Counters gathered while reading an edge list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub lines_read: usize,
    pub edges_loaded: usize,
    pub lines_skipped: usize,
    pub build: BuildStats,
}

/// Parse one line; `None` for blank or malformed lines. Tokens after the
/// weight are ignored.
pub fn parse_edge_line(line: &str) -> Option<EdgeRecord> {
    let mut tokens = line.split_whitespace();
    let source = tokens.next()?;
    let target = tokens.next()?;
    let weight = tokens.next()?.parse::<f64>().ok()?;

    Some(EdgeRecord {
        source: source.to_string(),
        target: target.to_string(),
        weight,
    })
}

/// Read every well-formed edge from `reader`, returning the records and how
/// many lines were skipped
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<(Vec<EdgeRecord>, usize)> {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        match parse_edge_line(&line) {
            Some(record) => records.push(record),
            None => {
                if !line.trim().is_empty() {
                    log::debug!("Skipping malformed line {}: {:?}", index + 1, line);
                }
                skipped += 1;
            }
        }
    }

    Ok((records, skipped))
}

/// Build a graph from an edge-list reader
pub fn load_graph<R: BufRead>(reader: R) -> Result<(Graph<String>, LoadStats)> {
    let (records, lines_skipped) = read_edge_list(reader)?;
    let edges_loaded = records.len();

    let mut builder = GraphBuilder::new();
    for record in records {
        builder.add_edge(record.source, record.target, record.weight);
    }
    let (graph, build) = builder.build();

    let stats = LoadStats {
        lines_read: edges_loaded + lines_skipped,
        edges_loaded,
        lines_skipped,
        build,
    };

    if lines_skipped > 0 {
        log::info!("Skipped {} blank or malformed lines", lines_skipped);
    }

    Ok((graph, stats))
}

/// Load an edge-list file into a graph
pub fn load_graph_from_file<P: AsRef<Path>>(path: P) -> Result<(Graph<String>, LoadStats)> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("Unable to open file: {}", path.display()))?;
    load_graph(BufReader::new(file))
}
