//! Weighted graphs used as input and output of the algorithms.

mod weighted;
pub use weighted::*;

pub mod random;
