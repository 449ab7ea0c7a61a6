//! Pure reductions from distance tables to histograms.

use std::collections::BTreeMap;

use crate::engine::UNREACHED;

/// Bucket counts by distance, sentinels ignored, trimmed after the last
/// nonzero bucket. The sum equals the number of discovered elements.
pub fn distance_histogram(distances: &[i8]) -> Vec<u64> {
    let mut counts = vec![0u64; 1 + i8::MAX as usize];
    for &distance in distances {
        if distance != UNREACHED {
            counts[distance as usize] += 1;
        }
    }
    while counts.last() == Some(&0) {
        counts.pop();
    }
    counts
}

/// Raw frequency table over the values themselves, sentinels included.
/// Diameter distributions are keyed this way.
pub fn value_histogram(values: &[i8]) -> BTreeMap<i8, u64> {
    let mut histogram = BTreeMap::new();
    for &value in values {
        *histogram.entry(value).or_insert(0u64) += 1;
    }
    histogram
}
