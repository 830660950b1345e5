/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::AlgoError;
use crate::graphs::WeightedGraph;
use crate::utils::metrics::{Stopwatch, TopSortMetrics};
use dsi_progress_logger::ProgressLog;
use std::collections::VecDeque;

/// Returns a topological sort of an acyclic graph using Kahn's algorithm.
///
/// Nodes with indegree zero are enqueued by increasing index; then nodes
/// are dequeued in FIFO order, and a successor is enqueued as soon as all
/// its predecessors have been dequeued. For a fixed graph the order is thus
/// fully determined by the order of successor lists.
///
/// If the graph contains a cycle, the nodes on the cycle (and those reachable
/// from it) never reach indegree zero, and [`AlgoError::NotAcyclic`] is
/// returned.
///
/// # Examples
///
/// ```
/// use condensation_algo::algo::top_sort;
/// use condensation_algo::graphs::WeightedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = WeightedGraph::from_arcs([(0, 1, 1.0), (0, 2, 1.0), (2, 3, 1.0), (1, 3, 1.0)]);
/// let (order, metrics) = top_sort(&graph, no_logging![])?;
/// assert_eq!(order, vec![0, 1, 2, 3].into_boxed_slice());
/// assert_eq!(metrics.pushes, 4);
/// # Ok::<(), condensation_algo::algo::AlgoError>(())
/// ```
pub fn top_sort(
    graph: &WeightedGraph,
    pl: &mut impl ProgressLog,
) -> Result<(Box<[usize]>, TopSortMetrics), AlgoError> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort");

    let stopwatch = Stopwatch::start();
    let mut metrics = TopSortMetrics::default();

    let mut indegree = graph.indegrees();
    let mut queue = VecDeque::with_capacity(num_nodes);
    let mut top_sort = Vec::with_capacity(num_nodes);

    for (node, &d) in indegree.iter().enumerate() {
        if d == 0 {
            queue.push_back(node);
            metrics.pushes += 1;
        }
    }

    while let Some(node) = queue.pop_front() {
        metrics.pops += 1;
        top_sort.push(node);
        for arc in graph.successors(node) {
            indegree[arc.target] -= 1;
            if indegree[arc.target] == 0 {
                queue.push_back(arc.target);
                metrics.pushes += 1;
            }
        }
        pl.light_update();
    }

    metrics.elapsed = stopwatch.elapsed();
    pl.done();

    if top_sort.len() < num_nodes {
        return Err(AlgoError::NotAcyclic {
            sorted: top_sort.len(),
            num_nodes,
        });
    }

    Ok((top_sort.into_boxed_slice(), metrics))
}
