use std::sync::OnceLock;

/// Lazily accumulates the sum of squared deviations from the mean.
///
/// Deliberately the direct one-pass deviation sum (mean is already known at
/// call time), not a cancellation-resistant scheme; the divisor variants live
/// on [`crate::SampleSet`]. The mean arrives by injection so the tracker
/// holds no reference back to its owner.
#[derive(Debug, Default)]
pub(crate) struct VarianceTracker {
    cell: OnceLock<f64>,
}

impl VarianceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `sum((x - mean)^2)` over all samples; full pass on first call, cached
    /// thereafter.
    pub(crate) fn sum_of_squared_deviations(&self, samples: &[f64], mean: f64) -> f64 {
        *self.cell.get_or_init(|| {
            samples
                .iter()
                .map(|&v| {
                    let deviation = v - mean;
                    deviation * deviation
                })
                .sum()
        })
    }
}
