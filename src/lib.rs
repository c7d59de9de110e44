//! Descriptive statistics over an immutable, finite set of f64 samples.
//!
//! Build a [`SampleSet`] once from a batch of values; every summary statistic
//! (min/max/mean/median/mode/range/quartiles/variance/stdev) is then available
//! as an infallible accessor. Construction validates the batch (non-empty,
//! finite total) and is the only fallible step.

mod error;
pub mod sampleset;

pub use error::{SampleSetError, SsResult};
pub use sampleset::order_stats::{MedianBracket, MedianPoint, Quartiles};
pub use sampleset::summary::StatisticalSummary;
pub use sampleset::SampleSet;
