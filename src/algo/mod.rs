//! Module containing all algorithms of the analysis pipeline.

pub mod sccs;

mod condensation;
pub use condensation::condensation;

mod top_sort;
pub use top_sort::top_sort;

pub mod dag_paths;
pub use dag_paths::{longest_paths, shortest_paths, CriticalPath, ShortestPaths};

mod analysis;
pub use analysis::*;

mod error;
pub use error::AlgoError;
