/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::sccs::Sccs;
use crate::graphs::WeightedGraph;
use crate::utils::metrics::{CondensationMetrics, Stopwatch};
use dsi_progress_logger::ProgressLog;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Computes the condensation of a graph, that is, the graph whose nodes are
/// the strongly connected components of `graph`.
///
/// The edges of `graph` are scanned in insertion order. Edges whose
/// endpoints lie in the same component are dropped; all other edges between
/// the same ordered pair of components are collapsed into a single arc whose
/// weight is the minimum weight among them. The successors of each component
/// appear in the order in which the corresponding pair was first met during
/// the scan.
///
/// The result is acyclic whenever `sccs` are the strongly connected
/// components of `graph`.
///
/// # Arguments
/// * `graph`: the graph.
/// * `sccs`: the strongly connected components of `graph`.
/// * `pl`: a progress logger.
pub fn condensation(
    graph: &WeightedGraph,
    sccs: &Sccs,
    pl: &mut impl ProgressLog,
) -> (WeightedGraph, CondensationMetrics) {
    pl.item_name("edge");
    pl.expected_updates(Some(graph.num_arcs()));
    pl.start("Computing the condensation graph...");

    let stopwatch = Stopwatch::start();
    let mut metrics = CondensationMetrics::default();
    let component = sccs.component();

    // Pairs in discovery order, with their minimum weight
    let mut pairs: Vec<(usize, usize, f64)> = Vec::new();
    let mut position: HashMap<(usize, usize), usize> = HashMap::new();

    for edge in graph.edges() {
        let (a, b) = (component[edge.from], component[edge.to]);
        if a == b {
            metrics.dropped_loops += 1;
        } else {
            match position.entry((a, b)) {
                Entry::Occupied(entry) => {
                    let weight = &mut pairs[*entry.get()].2;
                    *weight = weight.min(edge.weight);
                    metrics.merged_arcs += 1;
                }
                Entry::Vacant(entry) => {
                    entry.insert(pairs.len());
                    pairs.push((a, b, edge.weight));
                }
            }
        }
        pl.light_update();
    }

    let mut dag = WeightedGraph::new(sccs.num_components());
    for (a, b, weight) in pairs {
        dag.add_arc(a, b, weight);
    }

    metrics.elapsed = stopwatch.elapsed();
    pl.done();

    (dag, metrics)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::sccs;
    use crate::graphs::WeightedArc;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_minimum_weight_and_loops() {
        // {0, 1} is a component; 2 and 3 are singletons
        let graph = WeightedGraph::from_arcs([
            (0, 1, 1.0),
            (1, 0, 1.0),
            (0, 2, 7.0),
            (1, 2, 4.0),
            (1, 3, 2.0),
            (0, 2, 5.0),
        ]);
        let (sccs, _) = sccs::tarjan(&graph, no_logging![]);
        let (dag, metrics) = condensation(&graph, &sccs, no_logging![]);

        let c = sccs.component();
        assert_eq!(dag.num_nodes(), 3);
        assert_eq!(
            dag.successors(c[0]),
            &[
                WeightedArc {
                    target: c[2],
                    weight: 4.0
                },
                WeightedArc {
                    target: c[3],
                    weight: 2.0
                }
            ]
        );
        assert_eq!(metrics.dropped_loops, 2);
        assert_eq!(metrics.merged_arcs, 2);
        assert_eq!(
            dag.num_arcs() as u64 + metrics.dropped_loops + metrics.merged_arcs,
            graph.num_arcs() as u64
        );
    }

    #[test]
    fn test_single_component() {
        let graph = WeightedGraph::from_arcs([(0, 1, 1.0), (1, 0, 1.0)]);
        let (sccs, _) = sccs::tarjan(&graph, no_logging![]);
        let (dag, _) = condensation(&graph, &sccs, no_logging![]);
        assert_eq!(dag.num_nodes(), 1);
        assert_eq!(dag.num_arcs(), 0);
    }
}
