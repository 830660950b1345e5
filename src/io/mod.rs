//! Reading datasets and writing analysis results.

mod dataset;
pub use dataset::*;

mod report;
pub use report::*;

mod summary;
pub use summary::*;
