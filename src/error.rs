// src/error.rs
use core::fmt;

/// Library-wide error for samplestats.
///
/// All variants are construction-time failures; once a [`crate::SampleSet`]
/// exists, its accessors never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSetError {
    /// The caller supplied zero samples.
    EmptyInput,

    /// The running sum of the samples reached +inf.
    Overflow,

    /// The running sum of the samples reached -inf.
    Underflow,
}

impl fmt::Display for SampleSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleSetError::EmptyInput => write!(
                f,
                "samplestats: there must be at least one sample in the set"
            ),
            SampleSetError::Overflow => write!(
                f,
                "samplestats: f64 overflow while summing the sample set. \
hint: the values are too large for a double-precision total"
            ),
            SampleSetError::Underflow => write!(
                f,
                "samplestats: f64 underflow while summing the sample set. \
hint: the values are too negative for a double-precision total"
            ),
        }
    }
}

impl std::error::Error for SampleSetError {}

pub type SsResult<T> = Result<T, SampleSetError>;
