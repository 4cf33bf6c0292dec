//! Detection result types.

use serde::{Deserialize, Serialize};

/// Output of a single CFAR run, owned by the caller.
///
/// `thresholds` is index-aligned with the input signal and always has the
/// same length. `peaks` holds the indices whose sample strictly exceeded
/// the threshold, in ascending order with no duplicates.
///
/// Cells where neither training window fits inside the signal carry a
/// threshold of `f64::INFINITY` (no detection is possible there); under
/// `serde_json` those serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfarDetection {
    pub thresholds: Vec<f64>,
    pub peaks: Vec<usize>,
}

impl CfarDetection {
    /// Length of the analyzed signal.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn peak_count(&self) -> usize {
        self.peaks.len()
    }
}
