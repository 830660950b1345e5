/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::Analysis;
use crate::utils::StageMetrics;
use serde::{Serialize, Serializer};
use std::io::Write;

fn three_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.3}"))
}

/// One line of the run statistics.
///
/// Path-computation counters refer to the longest-path computation, which is
/// the last one of the analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub dataset: String,
    pub n_components: usize,
    pub n_nodes: usize,
    #[serde(serialize_with = "three_decimals")]
    pub scc_time_ms: f64,
    pub dfs_visits: u64,
    pub scc_edges: u64,
    pub topo_pushes: u64,
    pub topo_pops: u64,
    pub dags_relaxations: u64,
    #[serde(serialize_with = "three_decimals")]
    pub dags_time_ms: f64,
    /// The distance of the reachable component of largest index, or zero.
    #[serde(serialize_with = "three_decimals")]
    pub shortest_path_length: f64,
    /// The length of the critical path, or zero.
    #[serde(serialize_with = "three_decimals")]
    pub critical_path_length: f64,
}

impl SummaryRow {
    pub fn new(dataset: impl Into<String>, analysis: &Analysis) -> Self {
        let metrics = &analysis.metrics;
        SummaryRow {
            dataset: dataset.into(),
            n_components: analysis.sccs.num_components(),
            n_nodes: analysis.num_nodes,
            scc_time_ms: metrics.scc.elapsed_ms(),
            dfs_visits: metrics.scc.visits,
            scc_edges: metrics.scc.arcs,
            topo_pushes: metrics.top_sort.pushes,
            topo_pops: metrics.top_sort.pops,
            dags_relaxations: metrics.longest.relaxations,
            dags_time_ms: metrics.longest.elapsed_ms(),
            shortest_path_length: analysis
                .shortest
                .distances
                .values()
                .next_back()
                .copied()
                .unwrap_or(0.0),
            critical_path_length: analysis.critical.length.unwrap_or(0.0),
        }
    }
}

/// The header of the run statistics, in [`SummaryRow`] field order.
pub const SUMMARY_HEADER: [&str; 12] = [
    "dataset",
    "n_components",
    "n_nodes",
    "scc_time_ms",
    "dfs_visits",
    "scc_edges",
    "topo_pushes",
    "topo_pops",
    "dags_relaxations",
    "dags_time_ms",
    "shortest_path_length",
    "critical_path_length",
];

/// Writes [summary rows](SummaryRow) as CSV.
///
/// The header is written on creation, and every row is flushed as soon as
/// it is written, so that an interrupted run leaves a readable file behind.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(writer: W) -> csv::Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(SUMMARY_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn write(&mut self, row: &SummaryRow) -> csv::Result<()> {
        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, csv::IntoInnerError<csv::Writer<W>>> {
        self.writer.into_inner()
    }
}
