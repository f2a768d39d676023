use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use density_cluster_analyzer::cluster::cluster_graph;
use density_cluster_analyzer::config::Config;
use density_cluster_analyzer::data::load_graph_from_file;
use density_cluster_analyzer::report::{format_cluster_nodes, format_cluster_statistics, run_menu};
use density_cluster_analyzer::storage;

/// What to print once clustering finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Display {
    /// Interactive menu on stdin
    Menu,
    /// Per-cluster statistics
    Stats,
    /// Per-cluster members
    Nodes,
    /// Statistics followed by members
    All,
}

#[derive(Parser, Debug)]
#[clap(
    name = "density-cluster-analyzer",
    about = "Density-threshold clustering of undirected weighted graphs"
)]
struct Cli {
    /// Path to the edge list ("source target weight" per line)
    #[clap(long)]
    input: PathBuf,

    /// Minimum cluster density (0 to 1)
    #[clap(long, default_value = "0.5")]
    density_threshold: f64,

    /// Minimum share of the cluster a joining node must link to (0 to 1)
    #[clap(long, default_value = "0.5")]
    cp_threshold: f64,

    /// Directory for JSON/CSV results; nothing is written when omitted
    #[clap(long)]
    output_dir: Option<PathBuf>,

    /// How to present the clusters
    #[clap(long, value_enum, default_value = "menu")]
    display: Display,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(args.density_threshold, args.cp_threshold);
    config.validate()?;

    // 1. Load data
    let (graph, stats) = load_graph_from_file(&args.input)?;
    log::info!(
        "Loaded graph with {} nodes and {} edges ({} lines skipped)",
        graph.node_count(),
        stats.edges_loaded,
        stats.lines_skipped
    );

    // 2. Find clusters
    let outcome = cluster_graph(&graph, &config)?;

    // 3. Save results
    if let Some(output_dir) = &args.output_dir {
        storage::save_results(&outcome, &graph, &config, output_dir)?;
    }

    // 4. Present
    if outcome.clusters.is_empty() {
        println!("No clusters found.");
        return Ok(());
    }

    match args.display {
        Display::Menu => run_menu(&outcome.clusters, io::stdin().lock(), io::stdout().lock())?,
        Display::Stats => print!("{}", format_cluster_statistics(&outcome.clusters)),
        Display::Nodes => print!("{}", format_cluster_nodes(&outcome.clusters)),
        Display::All => {
            print!("{}", format_cluster_statistics(&outcome.clusters));
            print!("{}", format_cluster_nodes(&outcome.clusters));
        }
    }

    Ok(())
}
