/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{
    condensation, longest_paths, sccs, shortest_paths, top_sort, AlgoError, CriticalPath,
    ShortestPaths,
};
use crate::algo::sccs::Sccs;
use crate::graphs::WeightedGraph;
use crate::utils::metrics::{CondensationMetrics, PathMetrics, SccMetrics, TopSortMetrics};
use dsi_progress_logger::ProgressLog;

/// The metrics of each stage of an [`Analysis`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisMetrics {
    pub scc: SccMetrics,
    pub condensation: CondensationMetrics,
    pub top_sort: TopSortMetrics,
    pub shortest: PathMetrics,
    pub longest: PathMetrics,
}

/// The layered analysis of a graph.
///
/// Everything but [`sccs`](Self::sccs) is expressed in terms of component
/// indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The number of nodes of the analyzed graph.
    pub num_nodes: usize,
    pub sccs: Sccs,
    /// The condensation of the graph.
    pub condensation: WeightedGraph,
    /// A topological sort of the condensation.
    pub top_sort: Box<[usize]>,
    /// Shortest paths from the component of the source node.
    pub shortest: ShortestPaths,
    pub critical: CriticalPath,
    pub metrics: AnalysisMetrics,
}

/// Runs the whole analysis on a graph.
///
/// Computes the strongly connected components, the condensation, a
/// topological sort of the condensation, shortest paths from the component
/// of `source`, and longest paths. Each stage fully completes before the next
/// one starts, and each stage records its own metrics.
///
/// On an empty graph all results are empty and `source` is ignored.
///
/// # Errors
///
/// * [`AlgoError::SourceOutOfRange`] if the graph is not empty and `source`
///   is not one of its nodes.
/// * [`AlgoError::NotAcyclic`] if the condensation could not be sorted, which
///   signals an inconsistency between the graph and its components.
///
/// # Examples
///
/// ```
/// use condensation_algo::algo::analyze;
/// use condensation_algo::graphs::WeightedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = WeightedGraph::from_arcs([(0, 1, 1.0), (1, 0, 1.0)]);
/// let analysis = analyze(&graph, 0, no_logging![])?;
///
/// assert_eq!(analysis.sccs.num_components(), 1);
/// assert_eq!(analysis.critical.length, Some(0.0));
/// # Ok::<(), condensation_algo::algo::AlgoError>(())
/// ```
pub fn analyze(
    graph: &WeightedGraph,
    source: usize,
    pl: &mut impl ProgressLog,
) -> Result<Analysis, AlgoError> {
    let num_nodes = graph.num_nodes();
    if num_nodes != 0 && source >= num_nodes {
        return Err(AlgoError::SourceOutOfRange {
            node: source,
            num_nodes,
        });
    }

    let (sccs, scc_metrics) = sccs::tarjan(graph, pl);
    let (dag, condensation_metrics) = condensation(graph, &sccs, pl);
    let (top_sort, top_sort_metrics) = top_sort(&dag, pl)?;

    let (shortest, shortest_metrics) = if num_nodes == 0 {
        (ShortestPaths::default(), PathMetrics::default())
    } else {
        shortest_paths(&dag, &top_sort, sccs.component()[source], pl)
    };
    let (critical, longest_metrics) = longest_paths(&dag, &top_sort, pl);

    Ok(Analysis {
        num_nodes,
        sccs,
        condensation: dag,
        top_sort,
        shortest,
        critical,
        metrics: AnalysisMetrics {
            scc: scc_metrics,
            condensation: condensation_metrics,
            top_sort: top_sort_metrics,
            shortest: shortest_metrics,
            longest: longest_metrics,
        },
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_source_out_of_range() {
        let graph = WeightedGraph::from_arcs([(0, 1, 1.0)]);
        assert_eq!(
            analyze(&graph, 5, no_logging![]),
            Err(AlgoError::SourceOutOfRange {
                node: 5,
                num_nodes: 2
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        let analysis = analyze(&WeightedGraph::new(0), 0, no_logging![]).unwrap();
        assert_eq!(analysis.sccs.num_components(), 0);
        assert!(analysis.top_sort.is_empty());
        assert!(analysis.shortest.distances.is_empty());
        assert!(analysis.critical.distances.is_empty());
        assert_eq!(analysis.critical.length, None);
    }
}
