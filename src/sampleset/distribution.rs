use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::sync::OnceLock;

/// value -> number of occurrences across the whole sample set.
///
/// Keys compare by the exact floating-point representation; `OrderedFloat`
/// supplies the `Eq + Hash` the raw `f64` lacks.
pub type DistributionMap = HashMap<OrderedFloat<f64>, u64>;

/// Lazily builds the value-distribution map on first request.
///
/// The cell publishes exactly once; concurrent first calls block on the same
/// initialization and observe the same map.
#[derive(Debug, Default)]
pub(crate) struct DistributionTracker {
    cell: OnceLock<DistributionMap>,
}

impl DistributionTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Single linear pass over `sorted_samples` on first call; cached
    /// thereafter. Counts sum to `sorted_samples.len()`.
    pub(crate) fn map(&self, sorted_samples: &[f64]) -> &DistributionMap {
        self.cell.get_or_init(|| {
            let mut counts = DistributionMap::with_capacity(sorted_samples.len());
            for &value in sorted_samples {
                *counts.entry(OrderedFloat(value)).or_insert(0) += 1;
            }
            counts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_sample_count_and_match_occurrences() {
        let samples = [1.0, 1.0, 2.0, 3.0, 3.0, 3.0];
        let tracker = DistributionTracker::new();
        let map = tracker.map(&samples);

        assert_eq!(map.len(), 3);
        assert_eq!(map[&OrderedFloat(1.0)], 2);
        assert_eq!(map[&OrderedFloat(2.0)], 1);
        assert_eq!(map[&OrderedFloat(3.0)], 3);
        assert_eq!(map.values().sum::<u64>(), samples.len() as u64);
    }

    #[test]
    fn second_call_returns_the_same_published_map() {
        let samples = [5.0, 5.0];
        let tracker = DistributionTracker::new();
        let first = tracker.map(&samples) as *const DistributionMap;
        let second = tracker.map(&samples) as *const DistributionMap;
        assert_eq!(first, second, "map must be computed exactly once");
    }

    #[test]
    fn negative_zero_collapses_into_positive_zero() {
        // -0.0 == 0.0 under f64 equality, so both land on one key.
        let samples = [-0.0, 0.0];
        let tracker = DistributionTracker::new();
        let map = tracker.map(&samples);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&OrderedFloat(0.0_f64)], 2);
    }
}
