use std::collections::HashMap;
use std::sync::OnceLock;

use crate::sampleset::distribution::DistributionMap;

/// occurrence count -> values seen exactly that many times.
///
/// The inverse of the distribution map, keyed by frequency instead of value.
type ModalMap = HashMap<u64, Vec<f64>>;

/// Lazily inverts the distribution map and remembers the winning frequency.
///
/// The caller hands in the distribution map *after* it has been published, so
/// this cell never initializes another tracker from inside its own
/// initialization.
#[derive(Debug, Default)]
pub(crate) struct ModalTracker {
    cell: OnceLock<(u64, ModalMap)>,
}

impl ModalTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Highest occurrence count and the values occurring that many times.
    ///
    /// Tie policy: every value sharing the maximum count is returned, in
    /// unspecified order.
    pub(crate) fn modes(&self, distribution: &DistributionMap) -> (u64, &[f64]) {
        let (highest, modal_map) = self
            .cell
            .get_or_init(|| invert_distribution(distribution));

        let values = modal_map
            .get(highest)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        (*highest, values)
    }
}

fn invert_distribution(distribution: &DistributionMap) -> (u64, ModalMap) {
    let mut modal_map = ModalMap::new();
    let mut highest = 0_u64;

    for (value, &count) in distribution {
        modal_map.entry(count).or_default().push(value.into_inner());
        if count > highest {
            highest = count;
        }
    }

    (highest, modal_map)
}
