/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Shortest and longest (critical) paths on acyclic graphs.
//!
//! Both computations relax arcs following a topological order that is
//! passed by the caller, so that its cost is not accounted twice.

use crate::graphs::WeightedGraph;
use crate::utils::math::filtered_argmax;
use crate::utils::metrics::{PathMetrics, Stopwatch};
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The result of a single-source shortest-path computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShortestPaths {
    /// The distance of each node reachable from the source, source included.
    pub distances: BTreeMap<usize, f64>,
    /// A shortest path from the source to the last reachable node in
    /// topological order, or an empty path if the graph is empty.
    pub path: Vec<usize>,
}

/// The result of a longest-path computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CriticalPath {
    /// The length of the longest path ending at each node.
    pub distances: BTreeMap<usize, f64>,
    /// The length of the longest path in the graph, or [`None`] if the graph
    /// is empty.
    pub length: Option<f64>,
    /// A longest path, ending at the node of smallest index among those
    /// achieving [`length`](Self::length).
    pub path: Vec<usize>,
}

/// Follows predecessor links back from `end` and returns the path in forward
/// order.
fn path_to(end: usize, pred: &[Option<NonMaxUsize>]) -> Vec<usize> {
    let mut path = Vec::new();
    let mut curr = Some(end);
    while let Some(node) = curr {
        path.push(node);
        curr = pred[node].map(|pred| pred.get());
    }
    path.reverse();
    path
}

/// Computes single-source shortest paths on an acyclic graph.
///
/// Nodes are processed following `top_sort`; nodes not yet reached are
/// skipped, and an arc is relaxed only if it strictly improves the distance
/// of its target. The returned path ends at the *last* node of `top_sort`
/// that is reachable from `source`, which is not necessarily the farthest
/// one.
///
/// On an empty graph the result is empty and `source` is ignored.
///
/// # Arguments
/// * `graph`: an acyclic graph with nonnegative weights.
/// * `top_sort`: a topological sort of `graph`.
/// * `source`: the source node.
/// * `pl`: a progress logger.
///
/// # Panics
///
/// Panics if the graph is not empty and `source` is not one of its nodes.
///
/// # Examples
///
/// ```
/// use condensation_algo::algo::{shortest_paths, top_sort};
/// use condensation_algo::graphs::WeightedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = WeightedGraph::from_arcs([(0, 1, 2.0), (1, 2, 3.0), (0, 2, 10.0)]);
/// let (order, _) = top_sort(&graph, no_logging![])?;
/// let (shortest, metrics) = shortest_paths(&graph, &order, 0, no_logging![]);
///
/// assert_eq!(shortest.distances[&2], 5.0);
/// assert_eq!(shortest.path, vec![0, 1, 2]);
/// assert_eq!(metrics.relaxations, 3);
/// # Ok::<(), condensation_algo::algo::AlgoError>(())
/// ```
pub fn shortest_paths(
    graph: &WeightedGraph,
    top_sort: &[usize],
    source: usize,
    pl: &mut impl ProgressLog,
) -> (ShortestPaths, PathMetrics) {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return (ShortestPaths::default(), PathMetrics::default());
    }
    assert!(
        source < num_nodes,
        "Source node {source} out of range: the graph has {num_nodes} nodes"
    );

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing shortest paths...");

    let stopwatch = Stopwatch::start();
    let mut metrics = PathMetrics::default();

    let mut dist = vec![f64::INFINITY; num_nodes];
    let mut pred: Vec<Option<NonMaxUsize>> = vec![None; num_nodes];
    dist[source] = 0.0;

    for &node in top_sort {
        pl.light_update();
        if dist[node].is_infinite() {
            continue;
        }
        for arc in graph.successors(node) {
            let candidate = dist[node] + arc.weight;
            if dist[arc.target] > candidate {
                dist[arc.target] = candidate;
                pred[arc.target] = NonMaxUsize::new(node);
                metrics.relaxations += 1;
            }
        }
    }

    metrics.elapsed = stopwatch.elapsed();
    pl.done();

    let distances = dist
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_finite())
        .map(|(node, &d)| (node, d))
        .collect();

    let path = top_sort
        .iter()
        .rev()
        .find(|&&node| dist[node].is_finite())
        .map(|&end| path_to(end, &pred))
        .unwrap_or_default();

    (ShortestPaths { distances, path }, metrics)
}

/// Computes longest paths on an acyclic graph.
///
/// Every node with indegree zero is a source at distance zero; all other
/// nodes start at −∞. Nodes are processed following `top_sort`, and an arc
/// is relaxed only if it strictly increases the distance of its target.
///
/// # Arguments
/// * `graph`: an acyclic graph.
/// * `top_sort`: a topological sort of `graph`.
/// * `pl`: a progress logger.
///
/// # Examples
///
/// ```
/// use condensation_algo::algo::{longest_paths, top_sort};
/// use condensation_algo::graphs::WeightedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = WeightedGraph::from_arcs([(0, 1, 2.0), (1, 2, 3.0), (0, 2, 10.0)]);
/// let (order, _) = top_sort(&graph, no_logging![])?;
/// let (critical, _) = longest_paths(&graph, &order, no_logging![]);
///
/// assert_eq!(critical.length, Some(10.0));
/// assert_eq!(critical.path, vec![0, 2]);
/// # Ok::<(), condensation_algo::algo::AlgoError>(())
/// ```
pub fn longest_paths(
    graph: &WeightedGraph,
    top_sort: &[usize],
    pl: &mut impl ProgressLog,
) -> (CriticalPath, PathMetrics) {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing longest paths...");

    let stopwatch = Stopwatch::start();
    let mut metrics = PathMetrics::default();

    let mut dist = vec![f64::NEG_INFINITY; num_nodes];
    let mut pred: Vec<Option<NonMaxUsize>> = vec![None; num_nodes];
    for (node, d) in graph.indegrees().into_iter().enumerate() {
        if d == 0 {
            dist[node] = 0.0;
        }
    }

    for &node in top_sort {
        pl.light_update();
        if dist[node] == f64::NEG_INFINITY {
            continue;
        }
        for arc in graph.successors(node) {
            let candidate = dist[node] + arc.weight;
            if dist[arc.target] < candidate {
                dist[arc.target] = candidate;
                pred[arc.target] = NonMaxUsize::new(node);
                metrics.relaxations += 1;
            }
        }
    }

    metrics.elapsed = stopwatch.elapsed();
    pl.done();

    let distances = dist
        .iter()
        .enumerate()
        .filter(|(_, &d)| d > f64::NEG_INFINITY)
        .map(|(node, &d)| (node, d))
        .collect();

    let end = filtered_argmax(&dist, |_, d| d > f64::NEG_INFINITY);

    (
        CriticalPath {
            distances,
            length: end.map(|end| dist[end]),
            path: end.map(|end| path_to(end, &pred)).unwrap_or_default(),
        },
        metrics,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::top_sort;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_shortest_ends_at_last_reachable() {
        // 0 -> 1 (1.0), 0 -> 2 (9.0); 3 is unreachable from 0
        let graph = WeightedGraph::from_arcs([(0, 1, 1.0), (0, 2, 9.0), (3, 1, 1.0)]);
        let (order, _) = top_sort(&graph, no_logging![]).unwrap();
        assert_eq!(order, vec![0, 3, 2, 1].into_boxed_slice());

        let (shortest, metrics) = shortest_paths(&graph, &order, 0, no_logging![]);
        assert_eq!(
            shortest.distances,
            BTreeMap::from([(0, 0.0), (1, 1.0), (2, 9.0)])
        );
        // The path ends at 1, the last reachable node in topological
        // order, even if 2 is farther
        assert_eq!(shortest.path, vec![0, 1]);
        assert_eq!(metrics.relaxations, 2);
    }

    #[test]
    fn test_shortest_from_sink() {
        let graph = WeightedGraph::from_arcs([(0, 1, 1.0)]);
        let (order, _) = top_sort(&graph, no_logging![]).unwrap();
        let (shortest, metrics) = shortest_paths(&graph, &order, 1, no_logging![]);
        assert_eq!(shortest.distances, BTreeMap::from([(1, 0.0)]));
        assert_eq!(shortest.path, vec![1]);
        assert_eq!(metrics.relaxations, 0);
    }

    #[test]
    fn test_longest_multiple_sources() {
        // Two sources: 0 and 3
        let graph = WeightedGraph::from_arcs([(0, 1, 1.0), (3, 1, 4.0), (1, 2, 2.0)]);
        let (order, _) = top_sort(&graph, no_logging![]).unwrap();
        let (critical, metrics) = longest_paths(&graph, &order, no_logging![]);

        assert_eq!(critical.distances[&0], 0.0);
        assert_eq!(critical.distances[&3], 0.0);
        assert_eq!(critical.distances[&1], 4.0);
        assert_eq!(critical.length, Some(6.0));
        assert_eq!(critical.path, vec![3, 1, 2]);
        assert_eq!(metrics.relaxations, 3);
    }

    #[test]
    fn test_longest_ties_pick_smallest_index() {
        let graph = WeightedGraph::from_arcs([(0, 2, 3.0), (1, 3, 3.0)]);
        let (order, _) = top_sort(&graph, no_logging![]).unwrap();
        let (critical, _) = longest_paths(&graph, &order, no_logging![]);
        assert_eq!(critical.length, Some(3.0));
        assert_eq!(critical.path, vec![0, 2]);
    }

    #[test]
    fn test_empty() {
        let graph = WeightedGraph::new(0);
        let (shortest, _) = shortest_paths(&graph, &[], 0, no_logging![]);
        assert_eq!(shortest, ShortestPaths::default());
        let (critical, metrics) = longest_paths(&graph, &[], no_logging![]);
        assert_eq!(critical.length, None);
        assert!(critical.path.is_empty());
        assert_eq!(metrics.relaxations, 0);
    }

    #[test]
    #[should_panic]
    fn test_source_out_of_range() {
        let graph = WeightedGraph::new(2);
        shortest_paths(&graph, &[0, 1], 2, no_logging![]);
    }
}
