//! Order statistics for [`SampleSet`]: median and quartiles.
//!
//! This module implements median and quartile evaluation over the sorted
//! sample array using **recursive halving** with an **exclusive-median
//! split**:
//!
//! - **Odd length**: the median is the middle element. When splitting for
//!   quartiles, that element is excluded from *both* halves.
//! - **Even length**: the median is the average of the two middle elements;
//!   the halves meet exactly between them, so neither half shares an element
//!   with the other.
//!
//! The exclusive-median convention changes quartile values versus inclusive
//! conventions (e.g. Tukey hinges) and is part of the public contract.
//!
//! # Guarantees
//! - `minimum() <= median() <= maximum()` for every constructible set.
//! - `Quartiles::iqr == q3 - q1 >= 0`.
//! - Results are computed fresh per call from the immutable sorted array; no
//!   caching, no state.
//!
//! # Edge cases (explicit semantics)
//! - **n = 1** → `q1 == q3 ==` the single value, `iqr == 0`.
//! - **n = 2** → `q1` is the smaller value, `q3` the larger.

use crate::sampleset::SampleSet;

/// Where a median fell within a sorted slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedianBracket {
    /// Odd length: the median is the element at this index.
    At(usize),
    /// Even length: the median is the average of the elements at these two
    /// adjacent indices.
    Between(usize, usize),
}

/// A median value together with its position information, as needed by the
/// quartile split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianPoint {
    pub value: f64,
    pub bracket: MedianBracket,
}

/// First quartile, third quartile, and their difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

/// Median of a non-empty ascending slice, with bracket information.
pub fn median_of(sorted: &[f64]) -> MedianPoint {
    debug_assert!(!sorted.is_empty(), "median_of() requires a non-empty slice");
    let mid = sorted.len() / 2;

    if sorted.len() % 2 != 0 {
        return MedianPoint {
            value: sorted[mid],
            bracket: MedianBracket::At(mid),
        };
    }

    MedianPoint {
        value: (sorted[mid - 1] + sorted[mid]) / 2.0,
        bracket: MedianBracket::Between(mid - 1, mid),
    }
}

impl SampleSet {
    /// Median of the whole set.
    ///
    /// - Odd sample count: the middle element of the sorted array.
    /// - Even sample count: the average of the two middle elements.
    pub fn median(&self) -> f64 {
        median_of(self.samples()).value
    }

    /// First quartile, third quartile and interquartile range, using the
    /// exclusive-median split described in the module docs.
    pub fn interquartile_range(&self) -> Quartiles {
        let sorted = self.samples();

        match sorted.len() {
            1 => Quartiles {
                q1: sorted[0],
                q3: sorted[0],
                iqr: 0.0,
            },
            2 => Quartiles {
                q1: sorted[0],
                q3: sorted[1],
                iqr: sorted[1] - sorted[0],
            },
            _ => {
                let overall = median_of(sorted);
                let (lower, upper) = match overall.bracket {
                    MedianBracket::Between(_, right) => {
                        (&sorted[..right], &sorted[right..])
                    }
                    MedianBracket::At(mid) => (&sorted[..mid], &sorted[mid + 1..]),
                };

                let q1 = median_of(lower).value;
                let q3 = median_of(upper).value;
                Quartiles {
                    q1,
                    q3,
                    iqr: q3 - q1,
                }
            }
        }
    }
}
