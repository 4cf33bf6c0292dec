//! Greatest-Of cell-averaging CFAR detection.
//!
//! For every cell under test (CUT) the detector sums the `training_cells`
//! samples on each side of the guard band, takes the greater of the two
//! sums, and scales the resulting average by a factor derived from the
//! target false-alarm rate. Samples strictly above their threshold are
//! reported as peaks.

use crate::error::CfarError;
use crate::result::CfarDetection;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Greatest-Of CFAR detector.
///
/// `training_cells` and `guard_cells` count cells on EACH side of the cell
/// under test. The detector holds no mutable state: the same input always
/// yields the same output.
///
/// # Example
/// ```
/// use gocfar::CfarDetector;
///
/// let detector = CfarDetector::new(4, 1, 0.1)?;
/// let mut signal = vec![0.0; 10];
/// signal[9] = 100.0;
///
/// let result = detector.detect(&signal);
/// assert_eq!(result.peaks, vec![9]);
/// # Ok::<(), gocfar::CfarError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CfarConfig")]
pub struct CfarDetector {
    training_cells: usize,
    guard_cells: usize,
    false_alarm_rate: f64,
}

/// Unvalidated parameter set, the wire form of a detector. Deserialized
/// configurations pass through [`CfarDetector::new`] so an invalid one is
/// rejected instead of producing NaN thresholds.
#[derive(Debug, Clone, Copy, Deserialize)]
struct CfarConfig {
    training_cells: usize,
    guard_cells: usize,
    false_alarm_rate: f64,
}

impl TryFrom<CfarConfig> for CfarDetector {
    type Error = CfarError;

    fn try_from(config: CfarConfig) -> Result<Self, CfarError> {
        Self::new(
            config.training_cells,
            config.guard_cells,
            config.false_alarm_rate,
        )
    }
}

impl CfarDetector {
    /// Create a detector, validating the configuration up front.
    ///
    /// `training_cells` must be positive and `false_alarm_rate` must lie
    /// in the open interval (0, 1); anything else (including NaN) is
    /// rejected before any per-cell work.
    pub fn new(
        training_cells: usize,
        guard_cells: usize,
        false_alarm_rate: f64,
    ) -> Result<Self, CfarError> {
        if training_cells == 0 {
            return Err(CfarError::InvalidTrainingCells);
        }
        if !(false_alarm_rate > 0.0 && false_alarm_rate < 1.0) {
            return Err(CfarError::InvalidFalseAlarmRate(false_alarm_rate));
        }
        Ok(Self {
            training_cells,
            guard_cells,
            false_alarm_rate,
        })
    }

    pub fn training_cells(&self) -> usize {
        self.training_cells
    }

    pub fn guard_cells(&self) -> usize {
        self.guard_cells
    }

    pub fn false_alarm_rate(&self) -> f64 {
        self.false_alarm_rate
    }

    /// Scaling constant `T * (Pfa^(-1/T) - 1)` that converts an average
    /// noise estimate over `T` training cells into a detection threshold
    /// with per-cell false-alarm probability `Pfa`.
    pub fn threshold_factor(&self) -> f64 {
        let t = self.training_cells as f64;
        t * (self.false_alarm_rate.powf(-1.0 / t) - 1.0)
    }

    /// Run the detector over `samples` with incrementally maintained
    /// window sums (one add and one subtract per slide), O(N) overall.
    pub fn detect(&self, samples: &[f64]) -> CfarDetection {
        let n = samples.len();
        let t = self.training_cells;
        let g = self.guard_cells;
        let factor = self.threshold_factor();

        let mut thresholds = Vec::with_capacity(n);
        let mut peaks = Vec::new();

        // Running sums are only read while the matching window is fully
        // inside the signal: leading from cut == t + g onward, trailing
        // for the prefix of cuts with cut + g + t < n.
        let mut leading_sum = 0.0;
        let mut trailing_sum = 0.0;

        for cut in 0..n {
            let leading = if cut < t + g {
                None
            } else {
                if cut == t + g {
                    leading_sum = samples[..t].iter().sum();
                } else {
                    leading_sum += samples[cut - g - 1] - samples[cut - t - g - 1];
                }
                Some(leading_sum)
            };

            let trailing = if cut + g + t >= n {
                None
            } else {
                if cut == 0 {
                    trailing_sum = samples[g + 1..g + 1 + t].iter().sum();
                } else {
                    trailing_sum += samples[cut + g + t] - samples[cut + g];
                }
                Some(trailing_sum)
            };

            let threshold = self.combine(leading, trailing, factor);
            if samples[cut] > threshold {
                peaks.push(cut);
            }
            thresholds.push(threshold);
        }

        CfarDetection { thresholds, peaks }
    }

    /// Data-parallel variant: each cell's threshold is computed
    /// independently from the immutable input, fanned out with rayon.
    /// Semantics match [`detect`](Self::detect); the summation order
    /// differs, so results can diverge in the last ulp on arbitrary data.
    pub fn detect_par(&self, samples: &[f64]) -> CfarDetection {
        let factor = self.threshold_factor();
        let thresholds: Vec<f64> = (0..samples.len())
            .into_par_iter()
            .map(|cut| self.cell_threshold(samples, cut, factor))
            .collect();

        let peaks = thresholds
            .iter()
            .enumerate()
            .filter(|&(cut, &threshold)| samples[cut] > threshold)
            .map(|(cut, _)| cut)
            .collect();

        CfarDetection { thresholds, peaks }
    }

    /// Threshold for a single cell, summing both windows directly.
    fn cell_threshold(&self, samples: &[f64], cut: usize, factor: f64) -> f64 {
        let t = self.training_cells;
        let g = self.guard_cells;
        let n = samples.len();

        let leading = (cut >= t + g).then(|| samples[cut - t - g..cut - g].iter().sum::<f64>());
        let trailing =
            (cut + g + t < n).then(|| samples[cut + g + 1..cut + g + 1 + t].iter().sum::<f64>());

        self.combine(leading, trailing, factor)
    }

    /// Greatest-of combination over the available window sums. A window
    /// that does not fully fit inside the signal contributes nothing; with
    /// neither window available there is no noise estimate, so the
    /// threshold is infinite and the cell can never be a detection.
    fn combine(&self, leading: Option<f64>, trailing: Option<f64>, factor: f64) -> f64 {
        let greatest = match (leading, trailing) {
            (Some(a), Some(b)) => a.max(b),
            (Some(sum), None) | (None, Some(sum)) => sum,
            (None, None) => return f64::INFINITY,
        };
        greatest / self.training_cells as f64 * factor
    }
}
