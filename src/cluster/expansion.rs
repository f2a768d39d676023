//! Greedy fixed-point expansion of a single cluster from its seed

use std::collections::BTreeSet;

use serde::Serialize;

use crate::cluster::VisitedSet;
use crate::config::Config;
use crate::error::ClusterResult;
use crate::graph::{Graph, NodeId};

/// Outcome of testing one candidate against the cluster it was tentatively added to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateEvaluation<N> {
    /// Expansion round, starting at 1
    pub round: usize,

    pub candidate: N,

    /// Cluster size with the candidate included
    pub cluster_size: usize,

    /// Density with the candidate included
    pub density: f64,

    /// Candidate's periphery ratio, `None` if it is not in the graph
    pub periphery_ratio: Option<f64>,

    pub accepted: bool,
}

/// Trace of one expansion run, in evaluation order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpansionReport<N> {
    /// Rounds executed, including the final round that accepted nothing
    pub rounds: usize,

    pub evaluations: Vec<CandidateEvaluation<N>>,
}

impl<N> ExpansionReport<N> {
    pub fn accepted(&self) -> impl Iterator<Item = &CandidateEvaluation<N>> {
        self.evaluations.iter().filter(|e| e.accepted)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &CandidateEvaluation<N>> {
        self.evaluations.iter().filter(|e| !e.accepted)
    }
}

/// A candidate placed into the cluster and marked visited, pending a verdict.
///
/// Dropping without `commit` leaves the candidate in place, so callers must
/// resolve every trial with `commit` or `rollback`.
struct Tentative<'a, N: Ord> {
    cluster: &'a mut BTreeSet<N>,
    visited: &'a mut VisitedSet<N>,
    candidate: N,
}

impl<'a, N: NodeId> Tentative<'a, N> {
    fn apply(cluster: &'a mut BTreeSet<N>, visited: &'a mut VisitedSet<N>, candidate: N) -> Self {
        visited.mark(&candidate);
        cluster.insert(candidate.clone());
        Self {
            cluster,
            visited,
            candidate,
        }
    }

    fn members(&self) -> &BTreeSet<N> {
        &*self.cluster
    }

    fn commit(self) {}

    fn rollback(self) {
        self.cluster.remove(&self.candidate);
        self.visited.unmark(&self.candidate);
    }
}

/// Grows one cluster until a round accepts no new candidate.
///
/// Candidates within a round are evaluated in ascending order against the
/// cluster as already grown by that round, so earlier acceptances change the
/// density and periphery seen by later candidates.
pub struct ClusterExpander<'g, N: Ord> {
    graph: &'g Graph<N>,
    density_threshold: f64,
    cp_threshold: f64,
}

impl<'g, N: NodeId> ClusterExpander<'g, N> {
    pub fn new(graph: &'g Graph<N>, config: &Config) -> Self {
        Self {
            graph,
            density_threshold: config.density_threshold,
            cp_threshold: config.cp_threshold,
        }
    }

    /// Expand `cluster` in place.
    ///
    /// The seed must already be in `cluster` and marked in `visited`.
    pub fn expand(
        &self,
        cluster: &mut BTreeSet<N>,
        visited: &mut VisitedSet<N>,
    ) -> ClusterResult<ExpansionReport<N>> {
        let mut report = ExpansionReport {
            rounds: 0,
            evaluations: Vec::new(),
        };

        loop {
            report.rounds += 1;
            let round = report.rounds;
            let candidates = self.collect_candidates(cluster, visited)?;
            let mut accepted_any = false;

            for candidate in candidates {
                let evaluation = self.try_candidate(round, candidate, cluster, visited)?;
                log::debug!(
                    "round {} candidate {:?}: density {:.4}, periphery {:?} -> {}",
                    round,
                    evaluation.candidate,
                    evaluation.density,
                    evaluation.periphery_ratio,
                    if evaluation.accepted { "accepted" } else { "rejected" }
                );
                accepted_any |= evaluation.accepted;
                report.evaluations.push(evaluation);
            }

            if !accepted_any {
                break;
            }
        }

        Ok(report)
    }

    /// Unvisited neighbors of every current member, in ascending order
    fn collect_candidates(
        &self,
        cluster: &BTreeSet<N>,
        visited: &VisitedSet<N>,
    ) -> ClusterResult<BTreeSet<N>> {
        let mut candidates = BTreeSet::new();
        for node in cluster {
            for edge in self.graph.neighbors(node)? {
                if !visited.is_visited(&edge.target) {
                    candidates.insert(edge.target.clone());
                }
            }
        }
        Ok(candidates)
    }

    /// Tentatively add the candidate, evaluate, then commit or roll back
    fn try_candidate(
        &self,
        round: usize,
        candidate: N,
        cluster: &mut BTreeSet<N>,
        visited: &mut VisitedSet<N>,
    ) -> ClusterResult<CandidateEvaluation<N>> {
        let trial = Tentative::apply(cluster, visited, candidate);
        let evaluation = self.evaluate(round, &trial.candidate, trial.members());

        match &evaluation {
            Ok(evaluation) if evaluation.accepted => trial.commit(),
            _ => trial.rollback(),
        }

        evaluation
    }

    fn evaluate(
        &self,
        round: usize,
        candidate: &N,
        members: &BTreeSet<N>,
    ) -> ClusterResult<CandidateEvaluation<N>> {
        let density = self.graph.density(members)?;
        let periphery_ratio = self.graph.periphery_ratio(candidate, members);
        let in_periphery = self.graph.is_in_periphery(candidate, members, self.cp_threshold);

        Ok(CandidateEvaluation {
            round,
            candidate: candidate.clone(),
            cluster_size: members.len(),
            density,
            periphery_ratio,
            accepted: density >= self.density_threshold && in_periphery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::load_edges;

    fn seeded<N: NodeId>(graph: &Graph<N>, seed: N) -> (BTreeSet<N>, VisitedSet<N>) {
        let mut visited = VisitedSet::for_graph(graph);
        visited.mark(&seed);
        let cluster = BTreeSet::from([seed]);
        (cluster, visited)
    }

    #[test]
    fn test_triangle_absorbs_neighbors_and_rejects_pendant() {
        let graph = load_edges(vec![
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "C", 1.0),
            ("A", "D", 1.0),
        ]);
        let (mut cluster, mut visited) = seeded(&graph, "A");
        let expander = ClusterExpander::new(&graph, &Config::new(1.0, 1.0));

        let report = expander.expand(&mut cluster, &mut visited).unwrap();

        assert_eq!(cluster, BTreeSet::from(["A", "B", "C"]));
        assert!(!visited.is_visited(&"D"));
        assert_eq!(report.rounds, 2);
        let order: Vec<_> = report
            .evaluations
            .iter()
            .map(|e| (e.round, e.candidate, e.accepted))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, "B", true),
                (1, "C", true),
                (1, "D", false),
                (2, "D", false)
            ]
        );
    }

    #[test]
    fn test_later_candidates_see_earlier_acceptances() {
        // Path a - b - c with seed b: a joins first, then c is judged against {a, b, c}.
        let graph = load_edges(vec![("a", "b", 1.0), ("b", "c", 1.0)]);
        let (mut cluster, mut visited) = seeded(&graph, "b");
        let expander = ClusterExpander::new(&graph, &Config::new(0.9, 0.0));

        let report = expander.expand(&mut cluster, &mut visited).unwrap();

        assert_eq!(cluster, BTreeSet::from(["a", "b"]));
        let c = report.evaluations.iter().find(|e| e.candidate == "c").unwrap();
        assert_eq!(c.cluster_size, 3);
        assert!((c.density - 2.0 / 3.0).abs() < 1e-12);
        assert!(!c.accepted);
    }

    #[test]
    fn test_periphery_threshold_blocks_weakly_linked_candidate() {
        // Square a-b-c-d-a plus diagonal a-c. Seed a at zero density floor.
        let graph = load_edges(vec![
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("c", "d", 1.0),
            ("d", "a", 1.0),
            ("a", "c", 1.0),
        ]);
        let (mut cluster, mut visited) = seeded(&graph, "a");
        let expander = ClusterExpander::new(&graph, &Config::new(0.0, 1.0));

        expander.expand(&mut cluster, &mut visited).unwrap();

        // b and c join in round one (c links to both a and b); d links to only
        // a and c out of {a, b, c}, ratio 2/3 < 1.
        assert_eq!(cluster, BTreeSet::from(["a", "b", "c"]));
        assert!(!visited.is_visited(&"d"));
    }

    #[test]
    fn test_isolated_seed_stops_after_one_round() {
        let graph = load_edges(vec![("solo", "solo", 1.0)]);
        let (mut cluster, mut visited) = seeded(&graph, "solo");
        let expander = ClusterExpander::new(&graph, &Config::default());

        let report = expander.expand(&mut cluster, &mut visited).unwrap();

        assert_eq!(report.rounds, 1);
        assert!(report.evaluations.is_empty());
        assert_eq!(cluster.len(), 1);
    }

    #[test]
    fn test_rejected_candidates_are_rolled_back() {
        let graph = load_edges(vec![("x", "y", 1.0), ("x", "z", 1.0)]);
        let (mut cluster, mut visited) = seeded(&graph, "x");
        let expander = ClusterExpander::new(&graph, &Config::new(1.0, 1.0));

        let report = expander.expand(&mut cluster, &mut visited).unwrap();

        // y joins; z would leave {x, y, z} at density 2/3.
        assert_eq!(cluster, BTreeSet::from(["x", "y"]));
        assert_eq!(report.accepted().count(), 1);
        assert_eq!(report.rejected().count(), 2);
        assert!(!visited.is_visited(&"z"));
        assert_eq!(visited.visited_count(), 2);
    }
}
