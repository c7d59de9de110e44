// src/sampleset/sample_set.rs
use crate::error::{SampleSetError, SsResult};
use crate::sampleset::distribution::{DistributionMap, DistributionTracker};
use crate::sampleset::modal::ModalTracker;
use crate::sampleset::variance::VarianceTracker;
use crate::sstrace;

/// An immutable set of f64 samples plus its derived summary statistics.
///
/// - The sorted array and the validated total are fixed at construction; the
///   set is free to share across threads (`Send + Sync`).
/// - Distribution, mode and variance are computed lazily, exactly once each,
///   behind per-tracker once-cells.
/// - Median and quartiles are cheap enough to evaluate fresh per call; see
///   [`crate::sampleset::order_stats`].
#[derive(Debug)]
pub struct SampleSet {
    sorted_samples: Vec<f64>,
    total: f64,
    distribution_tracker: DistributionTracker,
    modal_tracker: ModalTracker,
    variance_tracker: VarianceTracker,
}

impl SampleSet {
    /// Build a set from a borrowed slice (defensive copy; the caller's data
    /// is never mutated or aliased).
    pub fn from_samples(samples: &[f64]) -> SsResult<SampleSet> {
        Self::from_vec(samples.to_vec())
    }

    /// Build a set taking ownership of the values.
    ///
    /// The sum is accumulated over the input **in its original order**; only
    /// the final total's identity with ±inf is tested, so an individual
    /// non-finite element is not rejected on its own.
    pub fn from_vec(samples: Vec<f64>) -> SsResult<SampleSet> {
        if samples.is_empty() {
            return Err(SampleSetError::EmptyInput);
        }

        let mut total = 0.0_f64;
        for &value in &samples {
            total += value;
        }
        if total == f64::INFINITY {
            return Err(SampleSetError::Overflow);
        }
        if total == f64::NEG_INFINITY {
            return Err(SampleSetError::Underflow);
        }

        let mut sorted_samples = samples;
        sorted_samples.sort_by(|a, b| a.total_cmp(b));

        sstrace!(
            "samplestats: constructed set n={} total={}",
            sorted_samples.len(),
            total
        );

        Ok(SampleSet {
            sorted_samples,
            total,
            distribution_tracker: DistributionTracker::new(),
            modal_tracker: ModalTracker::new(),
            variance_tracker: VarianceTracker::new(),
        })
    }

    /// Number of samples in the set (always >= 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.sorted_samples.len()
    }

    /// Always false; construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrow the ascending sorted sample array.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.sorted_samples
    }

    /// Sum of all samples, accumulated in original input order.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Smallest sample.
    #[inline]
    pub fn minimum(&self) -> f64 {
        self.sorted_samples[0]
    }

    /// Largest sample.
    #[inline]
    pub fn maximum(&self) -> f64 {
        self.sorted_samples[self.sorted_samples.len() - 1]
    }

    /// `maximum - minimum`.
    #[inline]
    pub fn range(&self) -> f64 {
        self.maximum() - self.minimum()
    }

    /// Arithmetic mean (`total / n`).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.total / self.sorted_samples.len() as f64
    }

    /// value -> occurrence-count map over the whole set.
    ///
    /// Built on first call and cached for the set's lifetime.
    pub fn distribution(&self) -> &DistributionMap {
        self.distribution_tracker.map(&self.sorted_samples)
    }

    /// Highest occurrence count and every value occurring that many times
    /// (order unspecified on ties).
    ///
    /// The distribution map is published before the modal cell initializes,
    /// so the two once-cells never nest.
    pub fn mode(&self) -> (u64, &[f64]) {
        let distribution = self.distribution();
        self.modal_tracker.modes(distribution)
    }

    fn sum_of_squared_deviations(&self) -> f64 {
        self.variance_tracker
            .sum_of_squared_deviations(&self.sorted_samples, self.mean())
    }

    /// Unbiased variance, divisor `n - 1`. NaN for a single-sample set, by
    /// floating-point convention rather than as an error.
    pub fn sample_variance(&self) -> f64 {
        self.sum_of_squared_deviations() / (self.sorted_samples.len() as f64 - 1.0)
    }

    /// Biased variance, divisor `n`.
    pub fn population_variance(&self) -> f64 {
        self.sum_of_squared_deviations() / self.sorted_samples.len() as f64
    }

    /// Square root of [`Self::sample_variance`].
    pub fn sample_stdev(&self) -> f64 {
        self.sample_variance().sqrt()
    }

    /// Square root of [`Self::population_variance`].
    pub fn population_stdev(&self) -> f64 {
        self.population_variance().sqrt()
    }
}
