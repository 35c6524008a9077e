#![deny(missing_docs)]
#![doc = "Fixed-shape one-dimensional histograms with two terminal normalization modes, plus CSV table export."]

pub mod histogram;
pub mod table;

pub use histogram::{Histogram, NormalizationRole, NormalizeOutcome};
pub use table::write_table;
