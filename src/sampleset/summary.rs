use serde::{Deserialize, Serialize};

use crate::sampleset::SampleSet;

/// One serializable snapshot of every summary statistic.
///
/// Convenience over the individual accessors; computing it forces the lazy
/// trackers. `mode_values` is sorted ascending so the snapshot is
/// deterministic even though [`SampleSet::mode`] leaves tie order
/// unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalSummary {
    pub n: usize,
    pub minimum: f64,
    pub maximum: f64,
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub mode_count: u64,
    pub mode_values: Vec<f64>,
    pub sample_variance: f64,
    pub population_variance: f64,
    pub sample_stdev: f64,
    pub population_stdev: f64,
}

impl SampleSet {
    /// Evaluate every statistic and return them as one snapshot.
    pub fn summary(&self) -> StatisticalSummary {
        let quartiles = self.interquartile_range();
        let (mode_count, mode_values) = self.mode();
        let mut mode_values = mode_values.to_vec();
        mode_values.sort_by(|a, b| a.total_cmp(b));

        StatisticalSummary {
            n: self.len(),
            minimum: self.minimum(),
            maximum: self.maximum(),
            range: self.range(),
            mean: self.mean(),
            median: self.median(),
            q1: quartiles.q1,
            q3: quartiles.q3,
            iqr: quartiles.iqr,
            mode_count,
            mode_values,
            sample_variance: self.sample_variance(),
            population_variance: self.population_variance(),
            sample_stdev: self.sample_stdev(),
            population_stdev: self.population_stdev(),
        }
    }
}
