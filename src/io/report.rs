/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::{Analysis, CriticalPath, ShortestPaths};
use serde::Serialize;
use std::collections::BTreeMap;

/// An arc of the condensation, as written in reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CondensationArc {
    pub from: usize,
    pub to: usize,
    pub w: f64,
}

/// The per-dataset result file.
///
/// Serializes to a JSON object whose keys appear in the same order as the
/// stages of the analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    /// The members of each component.
    #[serde(rename = "SCC")]
    pub sccs: &'a [Vec<usize>],
    /// The component of each node.
    #[serde(rename = "ComponentMap")]
    pub component_map: BTreeMap<usize, usize>,
    /// The arcs of the condensation, grouped by source component.
    #[serde(rename = "CondensationGraph")]
    pub condensation: Vec<CondensationArc>,
    #[serde(rename = "TopologicalOrder")]
    pub top_sort: &'a [usize],
    #[serde(rename = "ShortestPaths")]
    pub shortest: &'a ShortestPaths,
    #[serde(rename = "CriticalPath")]
    pub critical: &'a CriticalPath,
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Report {
            sccs: analysis.sccs.members(),
            component_map: analysis
                .sccs
                .component()
                .iter()
                .copied()
                .enumerate()
                .collect(),
            condensation: analysis
                .condensation
                .iter_arcs()
                .map(|e| CondensationArc {
                    from: e.from,
                    to: e.to,
                    w: e.weight,
                })
                .collect(),
            top_sort: &analysis.top_sort,
            shortest: &analysis.shortest,
            critical: &analysis.critical,
        }
    }

    /// Returns the report as pretty-printed JSON, terminated by a newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
