//! gocfar - Greatest-Of cell-averaging CFAR peak detection
//!
//! Computes an adaptive detection threshold for every sample of a 1-D
//! magnitude sequence (rectified audio, radar/sonar power) and reports the
//! samples that exceed it. The noise floor is estimated from training
//! cells on each side of the cell under test, guard cells keep target
//! energy out of the estimate, and the greater of the two side estimates
//! is scaled so the per-cell false-alarm probability stays constant.
//!
//! ## Features
//!
//! - **Validated configuration**: training/guard cell counts and
//!   false-alarm rate checked before any computation
//! - **Incremental sliding sums**: O(N) single pass, plus a rayon
//!   data-parallel variant
//! - **Explicit boundary handling**: a training window that does not fit
//!   inside the signal is excluded, never approximated
//! - **Batch runs**: one configuration across many named signals
//!
//! ## Module Structure
//!
//! - `detector` - the Greatest-Of CFAR algorithm
//! - `result` - detection result types
//! - `error` - configuration error taxonomy
//! - `signal` - PCM conditioning helpers
//! - `batch` - multi-signal fan-out
//!
//! ## Quick Start
//!
//! ```
//! use gocfar::CfarDetector;
//!
//! let detector = CfarDetector::new(4, 1, 0.1)?;
//!
//! let mut signal = vec![0.0; 11];
//! signal[5] = 100.0;
//!
//! let result = detector.detect(&signal);
//! assert_eq!(result.thresholds.len(), signal.len());
//! assert_eq!(result.peaks, vec![5]);
//! # Ok::<(), gocfar::CfarError>(())
//! ```

pub mod batch;
pub mod detector;
pub mod error;
pub mod result;
pub mod signal;

pub use batch::{detect_all, Signal, SignalDetection};
pub use detector::CfarDetector;
pub use error::CfarError;
pub use result::CfarDetection;
