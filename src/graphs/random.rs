/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::WeightedGraph;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random weighted directed graphs in the Erdős–Rényi model.
///
/// Every ordered pair of distinct nodes is an arc with probability `p`;
/// weights are drawn uniformly in `[0..max_weight)`. The same seed always
/// yields the same graph, arcs being generated by increasing source and then
/// increasing target.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    num_nodes: usize,
    p: f64,
    max_weight: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a generator.
    ///
    /// # Arguments
    /// * `num_nodes`: the number of nodes.
    /// * `p`: the probability of each arc.
    /// * `seed`: the seed of the pseudorandom number generator.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in `[0..1]`.
    pub fn new(num_nodes: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "Probability {p} not in [0..1]");
        Self {
            num_nodes,
            p,
            max_weight: 10.0,
            seed,
        }
    }

    /// Sets the upper bound (excluded) for weights.
    ///
    /// A nonpositive bound makes all weights zero.
    pub fn max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Generates the graph.
    pub fn generate(&self) -> WeightedGraph {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut graph = WeightedGraph::new(self.num_nodes);
        for from in 0..self.num_nodes {
            for to in 0..self.num_nodes {
                if from != to && rng.random_bool(self.p) {
                    let weight = if self.max_weight > 0.0 {
                        rng.random_range(0.0..self.max_weight)
                    } else {
                        0.0
                    };
                    graph.add_arc(from, to, weight);
                }
            }
        }
        graph
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reproducible() {
        let a = ErdosRenyi::new(30, 0.1, 7).generate();
        let b = ErdosRenyi::new(30, 0.1, 7).generate();
        assert_eq!(a, b);
        assert_eq!(a.num_nodes(), 30);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(ErdosRenyi::new(10, 0.0, 0).generate().num_arcs(), 0);
        let full = ErdosRenyi::new(10, 1.0, 0).max_weight(0.0).generate();
        assert_eq!(full.num_arcs(), 90);
        assert!(full.edges().iter().all(|e| e.weight == 0.0));
    }
}
