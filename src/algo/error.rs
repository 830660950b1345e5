/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use thiserror::Error;

/// Structural violations detected by the algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// A topological sort could not order every node.
    ///
    /// On a condensation this means that the strongly connected components
    /// it was built from are inconsistent with the graph.
    #[error("graph is not acyclic: only {sorted} of {num_nodes} nodes could be sorted")]
    NotAcyclic { sorted: usize, num_nodes: usize },
    /// The source of a shortest-path computation is not a node of the graph.
    #[error("source node {node} out of range: the graph has {num_nodes} nodes")]
    SourceOutOfRange { node: usize, num_nodes: usize },
}
