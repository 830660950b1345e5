/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fmt::Display;
use std::time::{Duration, Instant};

/// Metrics of a single stage of the analysis.
///
/// Every algorithm returns a fresh instance of its metrics alongside its
/// result, so counters never carry over from one call to the next.
pub trait StageMetrics: Display {
    /// The wall-clock time of the stage.
    fn elapsed(&self) -> Duration;

    /// The wall-clock time of the stage in (fractional) milliseconds.
    fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_nanos() as f64 / 1_000_000.0
    }

    /// A one-line human-readable report.
    fn report(&self) -> String {
        self.to_string()
    }
}

/// Brackets a synchronous call with wall-clock timestamps.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch(Instant);

impl Stopwatch {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Metrics of [Tarjan's algorithm](crate::algo::sccs::tarjan).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SccMetrics {
    /// Number of nodes discovered by the depth-first visit.
    pub visits: u64,
    /// Number of arcs examined.
    pub arcs: u64,
    pub elapsed: Duration,
}

/// Metrics of the [condensation](crate::algo::condensation()) of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CondensationMetrics {
    /// Edges folded into a component pair that was already present.
    pub merged_arcs: u64,
    /// Edges whose endpoints lie in the same component.
    pub dropped_loops: u64,
    pub elapsed: Duration,
}

/// Metrics of a [topological sort](crate::algo::top_sort()).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopSortMetrics {
    /// Enqueued nodes.
    pub pushes: u64,
    /// Dequeued nodes.
    pub pops: u64,
    pub elapsed: Duration,
}

/// Metrics of a [shortest-path](crate::algo::shortest_paths()) or
/// [longest-path](crate::algo::longest_paths()) computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathMetrics {
    /// Number of successful relaxations.
    pub relaxations: u64,
    pub elapsed: Duration,
}

macro_rules! impl_stage_metrics {
    ($($ty:ty),*) => {
        $(
            impl StageMetrics for $ty {
                #[inline(always)]
                fn elapsed(&self) -> Duration {
                    self.elapsed
                }
            }
        )*
    };
}

impl_stage_metrics!(SccMetrics, CondensationMetrics, TopSortMetrics, PathMetrics);

impl Display for SccMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SCC(visits={} edges={} time={:.3}ms)",
            self.visits,
            self.arcs,
            self.elapsed_ms()
        )
    }
}

impl Display for CondensationMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Condensation(merged={} loops={} time={:.3}ms)",
            self.merged_arcs,
            self.dropped_loops,
            self.elapsed_ms()
        )
    }
}

impl Display for TopSortMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Topo(pushes={} pops={} time={:.3}ms)",
            self.pushes,
            self.pops,
            self.elapsed_ms()
        )
    }
}

impl Display for PathMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DAGSP(relax={} time={:.3}ms)",
            self.relaxations,
            self.elapsed_ms()
        )
    }
}
