mod argmax;

/// Module containing mathematical utilities.
pub mod math {
    pub use super::argmax::*;
}

pub mod metrics;
pub use metrics::StageMetrics;
