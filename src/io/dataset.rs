/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::WeightedGraph;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
    /// Weights must be finite and nonnegative.
    #[error("edge {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f64 },
    #[error(
        "edge {index} has endpoint {node}, but nodes must be smaller than {max}",
        max = Dataset::MAX_NODES
    )]
    NodeOutOfRange { index: usize, node: usize },
    #[error(
        "{n} nodes requested, but at most {max} are supported",
        max = Dataset::MAX_NODES
    )]
    TooManyNodes { n: usize },
}

/// An edge of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EdgeRecord {
    pub u: usize,
    pub v: usize,
    /// The weight of the edge; 1 if missing.
    #[serde(default)]
    pub w: Option<f64>,
}

/// A graph description, as read from a JSON file.
///
/// ```json
/// { "n": 4, "directed": true, "source": 0,
///   "edges": [ {"u": 0, "v": 1, "w": 2.5}, {"u": 1, "v": 2} ] }
/// ```
///
/// All fields are optional, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    /// A lower bound on the number of nodes.
    #[serde(default)]
    pub n: Option<usize>,
    /// Whether edges are directed; if not, each edge yields two arcs.
    #[serde(default)]
    pub directed: bool,
    /// The source of shortest paths; 0 if missing.
    #[serde(default)]
    pub source: Option<usize>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl Dataset {
    pub const DEFAULT_WEIGHT: f64 = 1.0;
    /// The largest number of nodes a dataset may describe.
    pub const MAX_NODES: usize = 1 << 28;

    /// Parses a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// The source node of shortest paths.
    pub fn source(&self) -> usize {
        self.source.unwrap_or(0)
    }

    /// The number of nodes, that is, the maximum between `n` and the largest
    /// endpoint plus one.
    ///
    /// # Errors
    ///
    /// * [`DatasetError::TooManyNodes`] if `n` exceeds [`MAX_NODES`](Self::MAX_NODES).
    /// * [`DatasetError::NodeOutOfRange`] if an endpoint is not smaller than
    ///   [`MAX_NODES`](Self::MAX_NODES).
    pub fn num_nodes(&self) -> Result<usize, DatasetError> {
        let n = self.n.unwrap_or(0);
        if n > Self::MAX_NODES {
            return Err(DatasetError::TooManyNodes { n });
        }
        self.edges
            .iter()
            .enumerate()
            .try_fold(n, |num_nodes, (index, edge)| {
                let node = edge.u.max(edge.v);
                if node >= Self::MAX_NODES {
                    return Err(DatasetError::NodeOutOfRange { index, node });
                }
                Ok(num_nodes.max(node + 1))
            })
    }

    /// Builds the graph described by this dataset.
    ///
    /// Edges are inserted in dataset order; in the undirected case each edge
    /// `(u, v)` is followed by its reverse `(v, u)`.
    pub fn to_graph(&self) -> Result<WeightedGraph, DatasetError> {
        let mut graph = WeightedGraph::new(self.num_nodes()?);
        for (index, edge) in self.edges.iter().enumerate() {
            let weight = edge.w.unwrap_or(Self::DEFAULT_WEIGHT);
            if !weight.is_finite() || weight < 0.0 {
                return Err(DatasetError::InvalidWeight { index, weight });
            }
            graph.add_arc(edge.u, edge.v, weight);
            if !self.directed {
                graph.add_arc(edge.v, edge.u, weight);
            }
        }
        Ok(graph)
    }
}
