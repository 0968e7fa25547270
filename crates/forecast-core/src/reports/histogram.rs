//! Forecast error histogram
//!
//! Buckets residuals (actual minus predicted) into multiples of 5 units.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Width of a histogram bucket, in the same unit as the data
const BUCKET_WIDTH: f64 = 5.0;

/// One bucket of the forecast error histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Bucket center: residual rounded to the nearest multiple of 5
    pub error: i64,
    /// Number of residuals falling in this bucket
    pub frequency: u64,
}

/// Bucket forecast residuals into a sparse histogram
///
/// Pairs `actual` with `predicted` index by index, truncating to the shorter
/// of the two. Each residual lands in the nearest multiple of 5 (ties round
/// away from zero). Empty buckets are omitted; output is sorted ascending
/// by bucket value.
pub fn residual_histogram(actual: &[f64], predicted: &[f64]) -> Vec<HistogramBin> {
    let mut buckets: BTreeMap<i64, u64> = BTreeMap::new();

    for (a, p) in actual.iter().zip(predicted.iter()) {
        let bucket = ((a - p) / BUCKET_WIDTH).round() as i64 * BUCKET_WIDTH as i64;
        *buckets.entry(bucket).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(error, frequency)| HistogramBin { error, frequency })
        .collect()
}
