use std::collections::BTreeSet;
use std::io::Write;

use density_cluster_analyzer::cluster::{ClusterExpander, VisitedSet};
use density_cluster_analyzer::data::load_graph_from_file;
use density_cluster_analyzer::report::format_cluster_statistics;
use density_cluster_analyzer::{cluster_graph, perform_clustering, ClusterError, Config, Graph};
use pretty_assertions::assert_eq;

fn write_edge_list(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn names(members: &BTreeSet<String>) -> Vec<&str> {
    members.iter().map(String::as_str).collect()
}

#[test]
fn triangle_with_pendant_from_file() {
    let file = write_edge_list("A B 0.3\nA C 0.9\nB C 2\nA D 1\n");
    let (graph, stats) = load_graph_from_file(file.path()).unwrap();
    assert_eq!(stats.edges_loaded, 4);

    let outcome = cluster_graph(&graph, &Config::new(1.0, 1.0)).unwrap();

    assert_eq!(outcome.clusters.len(), 1);
    assert_eq!(names(&outcome.clusters[0].members), vec!["A", "B", "C"]);
    assert_eq!(outcome.clusters[0].density, 1.0);
    assert_eq!(outcome.discarded.len(), 1);
    assert!(outcome.clusters.iter().all(|c| !c.contains(&"D".to_string())));
}

#[test]
fn weights_do_not_affect_clustering() {
    let light = write_edge_list("A B 0.001\nA C 0.001\nB C 0.001\nA D 0.001\n");
    let heavy = write_edge_list("A B 900\nA C 12\nB C 5e3\nA D 1e9\n");
    let config = Config::new(0.6, 0.5);

    let (light_graph, _) = load_graph_from_file(light.path()).unwrap();
    let (heavy_graph, _) = load_graph_from_file(heavy.path()).unwrap();

    let light_members: Vec<_> = perform_clustering(&light_graph, &config)
        .unwrap()
        .into_iter()
        .map(|c| c.members)
        .collect();
    let heavy_members: Vec<_> = perform_clustering(&heavy_graph, &config)
        .unwrap()
        .into_iter()
        .map(|c| c.members)
        .collect();
    assert_eq!(light_members, heavy_members);
}

#[test]
fn empty_file_yields_no_clusters() {
    let file = write_edge_list("");
    let (graph, _) = load_graph_from_file(file.path()).unwrap();
    assert!(perform_clustering(&graph, &Config::default()).unwrap().is_empty());
}

#[test]
fn rejected_candidate_can_join_a_later_seed() {
    // Seed "a" takes "b"; "c" is rejected from {a, b} and later seeds its own
    // cluster together with "d".
    let file = write_edge_list("a b 1\nb c 1\nc d 1\n");
    let (graph, _) = load_graph_from_file(file.path()).unwrap();

    let clusters = perform_clustering(&graph, &Config::new(1.0, 1.0)).unwrap();

    let members: Vec<Vec<&str>> = clusters.iter().map(|c| names(&c.members)).collect();
    assert_eq!(members, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn expander_is_usable_directly() {
    let mut graph: Graph<String> = Graph::new();
    graph.add_edge("hub".into(), "x".into(), 1.0);
    graph.add_edge("hub".into(), "y".into(), 1.0);
    graph.add_edge("x".into(), "y".into(), 1.0);

    let config = Config::new(0.5, 0.5);
    let expander = ClusterExpander::new(&graph, &config);
    let mut visited = VisitedSet::for_graph(&graph);
    let seed = "hub".to_string();
    visited.mark(&seed);
    let mut cluster = BTreeSet::from([seed]);

    let report = expander.expand(&mut cluster, &mut visited).unwrap();

    assert_eq!(names(&cluster), vec!["hub", "x", "y"]);
    assert_eq!(report.accepted().count(), 2);
    assert_eq!(visited.unvisited_count(), 0);
}

#[test]
fn invalid_threshold_is_an_error() {
    let graph: Graph<String> = Graph::new();
    assert_eq!(
        perform_clustering(&graph, &Config::new(-0.5, 0.5)).unwrap_err(),
        ClusterError::InvalidThreshold {
            name: "density_threshold",
            value: -0.5
        }
    );
}

#[test]
fn parallel_edges_can_push_density_above_one() {
    let file = write_edge_list("p q 1\np q 1\n");
    let (graph, stats) = load_graph_from_file(file.path()).unwrap();
    assert_eq!(stats.build.parallel_edges, 1);

    let clusters = perform_clustering(&graph, &Config::new(1.0, 1.0)).unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].density, 2.0);
    assert_eq!(
        format_cluster_statistics(&clusters),
        "Cluster 1:\n  Number of nodes: 2\n  Number of edges: 2\n  Density: 2.0000\n\n"
    );
}
