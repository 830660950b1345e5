/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::graphs::WeightedGraph;
use crate::utils::metrics::{SccMetrics, Stopwatch};
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

/// Discovery index of nodes that have not been visited yet.
const UNVISITED: usize = usize::MAX;

/// Tarjan's algorithm for strongly connected components.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is an explicit stack of pairs made of a node and the
/// position of the next successor to enumerate. Discovery indices and low
/// links are exactly those of the classical recursive formulation, so
/// components are emitted (and numbered) in the same order, that is, in
/// reverse topological order of the condensation.
///
/// Components list their nodes in the order in which they are popped from
/// the component stack.
///
/// The returned metrics count one visit per node and one arc per successor
/// enumerated, loops and parallel arcs included.
///
/// # Examples
///
/// ```
/// use condensation_algo::algo::sccs;
/// use condensation_algo::graphs::WeightedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = WeightedGraph::from_arcs([(0, 1, 1.0), (1, 0, 1.0), (1, 2, 1.0)]);
/// let (sccs, metrics) = sccs::tarjan(&graph, no_logging![]);
///
/// assert_eq!(sccs.num_components(), 2);
/// assert_eq!(sccs.component()[0], sccs.component()[1]);
/// assert_eq!(metrics.visits, 3);
/// assert_eq!(metrics.arcs, 3);
/// ```
pub fn tarjan(graph: &WeightedGraph, pl: &mut impl ProgressLog) -> (Sccs, SccMetrics) {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let stopwatch = Stopwatch::start();
    let mut metrics = SccMetrics::default();

    let mut index = vec![UNVISITED; num_nodes].into_boxed_slice();
    let mut low_link = vec![0; num_nodes].into_boxed_slice();
    let mut on_stack = BitVec::new(num_nodes);
    // Nodes visited but not yet assigned to a component
    let mut component_stack = Vec::with_capacity(16);
    // The visit path: a node and the position of its next successor
    let mut visit_stack: Vec<(usize, usize)> = Vec::with_capacity(16);
    let mut component = vec![0; num_nodes].into_boxed_slice();
    let mut members: Vec<Vec<usize>> = Vec::new();
    let mut next_index = 0;

    for root in 0..num_nodes {
        if index[root] != UNVISITED {
            continue;
        }

        metrics.visits += 1;
        index[root] = next_index;
        low_link[root] = next_index;
        next_index += 1;
        component_stack.push(root);
        on_stack.set(root, true);
        visit_stack.push((root, 0));

        while let Some((node, cursor)) = visit_stack.last_mut() {
            let node = *node;

            if let Some(arc) = graph.successors(node).get(*cursor) {
                *cursor += 1;
                metrics.arcs += 1;
                let succ = arc.target;

                if index[succ] == UNVISITED {
                    metrics.visits += 1;
                    index[succ] = next_index;
                    low_link[succ] = next_index;
                    next_index += 1;
                    component_stack.push(succ);
                    on_stack.set(succ, true);
                    visit_stack.push((succ, 0));
                } else if on_stack.get(succ) {
                    low_link[node] = low_link[node].min(index[succ]);
                }
                continue;
            }

            // All successors enumerated: retreat from node
            visit_stack.pop();

            if low_link[node] == index[node] {
                let id = members.len();
                let mut nodes = Vec::new();
                while let Some(member) = component_stack.pop() {
                    on_stack.set(member, false);
                    component[member] = id;
                    nodes.push(member);
                    if member == node {
                        break;
                    }
                }
                members.push(nodes);
            }

            // Propagate knowledge to the parent
            if let Some(&(parent, _)) = visit_stack.last() {
                low_link[parent] = low_link[parent].min(low_link[node]);
            }

            pl.light_update();
        }
    }

    metrics.elapsed = stopwatch.elapsed();
    pl.done();

    (Sccs::new(members.len(), component, members), metrics)
}
