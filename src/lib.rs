/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod batch;
pub mod graphs;
pub mod io;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    pub use super::utils::StageMetrics;
}

/// Use `use condensation_algo::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::sccs;
    pub use algo::{
        analyze, condensation, longest_paths, shortest_paths, top_sort, AlgoError, Analysis,
        CriticalPath, ShortestPaths,
    };
    pub use graphs::{Edge, WeightedArc, WeightedGraph};
    pub use traits::*;
    pub use utils::metrics::{
        CondensationMetrics, PathMetrics, SccMetrics, Stopwatch, TopSortMetrics,
    };
}
