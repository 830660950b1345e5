/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A weighted arc as seen from its source node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedArc {
    /// The node the arc points to.
    pub target: usize,
    /// The weight of the arc.
    pub weight: f64,
}

/// A weighted directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// An immutable-after-construction weighted directed multigraph.
///
/// Nodes are the integers in `[0..num_nodes)`. The graph keeps both the list
/// of edges in insertion order and, for each node, the list of its outgoing
/// arcs in insertion order. Parallel arcs and loops are allowed.
///
/// # Examples
///
/// ```
/// use condensation_algo::graphs::WeightedGraph;
///
/// let graph = WeightedGraph::from_arcs([(0, 1, 2.0), (1, 2, 3.0), (0, 2, 10.0)]);
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_arcs(), 3);
/// assert_eq!(graph.outdegree(0), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    edges: Vec<Edge>,
    succ: Vec<Vec<WeightedArc>>,
}

impl WeightedGraph {
    /// Creates a graph with `num_nodes` nodes and no arcs.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            edges: Vec::new(),
            succ: vec![Vec::new(); num_nodes],
        }
    }

    /// Creates a graph from a list of weighted arcs.
    ///
    /// The number of nodes is the largest endpoint plus one.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize, f64)>) -> Self {
        let mut graph = Self::new(0);
        for (from, to, weight) in arcs {
            graph.add_node(from.max(to));
            graph.add_arc(from, to, weight);
        }
        graph
    }

    /// Creates a symmetric graph from a list of weighted edges.
    ///
    /// Each edge `(u, v, w)` becomes the arc `(u, v, w)` followed by the arc
    /// `(v, u, w)`.
    pub fn from_undirected_arcs(arcs: impl IntoIterator<Item = (usize, usize, f64)>) -> Self {
        let mut graph = Self::new(0);
        for (u, v, weight) in arcs {
            graph.add_node(u.max(v));
            graph.add_arc(u, v, weight);
            graph.add_arc(v, u, weight);
        }
        graph
    }

    /// Makes sure that `node` exists, growing the graph if needed.
    pub fn add_node(&mut self, node: usize) {
        if node >= self.succ.len() {
            self.succ.resize_with(node + 1, Vec::new);
        }
    }

    /// Adds an arc.
    ///
    /// # Panics
    ///
    /// Panics if one of the endpoints is not a node of the graph.
    pub fn add_arc(&mut self, from: usize, to: usize, weight: f64) {
        let num_nodes = self.succ.len();
        assert!(
            from < num_nodes && to < num_nodes,
            "Arc ({from}, {to}) out of range: the graph has {num_nodes} nodes"
        );
        self.succ[from].push(WeightedArc { target: to, weight });
        self.edges.push(Edge { from, to, weight });
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.edges.len()
    }

    /// The outgoing arcs of `node`, in insertion order.
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &[WeightedArc] {
        &self.succ[node]
    }

    #[inline(always)]
    pub fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates on all arcs grouped by source node, that is, the successors
    /// of node 0 first, then those of node 1, and so on.
    pub fn iter_arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        self.succ.iter().enumerate().flat_map(|(from, arcs)| {
            arcs.iter().map(move |arc| Edge {
                from,
                to: arc.target,
                weight: arc.weight,
            })
        })
    }

    /// Returns the indegree of every node.
    pub fn indegrees(&self) -> Vec<usize> {
        let mut indegrees = vec![0; self.num_nodes()];
        for arcs in &self.succ {
            for arc in arcs {
                indegrees[arc.target] += 1;
            }
        }
        indegrees
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_arcs_infers_nodes() {
        let graph = WeightedGraph::from_arcs([(3, 1, 1.0), (0, 2, 4.0)]);
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.successors(3), &[WeightedArc { target: 1, weight: 1.0 }]);
        assert!(graph.successors(1).is_empty());
    }

    #[test]
    fn test_undirected_doubles_arcs() {
        let graph = WeightedGraph::from_undirected_arcs([(0, 1, 5.0)]);
        assert_eq!(graph.num_arcs(), 2);
        assert_eq!(
            graph.edges(),
            &[
                Edge { from: 0, to: 1, weight: 5.0 },
                Edge { from: 1, to: 0, weight: 5.0 }
            ]
        );
    }

    #[test]
    fn test_iter_arcs_is_grouped() {
        let graph = WeightedGraph::from_arcs([(1, 0, 1.0), (0, 1, 2.0), (1, 2, 3.0)]);
        let grouped = graph
            .iter_arcs()
            .map(|e| (e.from, e.to))
            .collect::<Vec<_>>();
        assert_eq!(grouped, vec![(0, 1), (1, 0), (1, 2)]);
        assert_eq!(graph.indegrees(), vec![1, 1, 1]);
    }

    #[test]
    #[should_panic]
    fn test_arc_out_of_range() {
        let mut graph = WeightedGraph::new(2);
        graph.add_arc(0, 2, 1.0);
    }
}
