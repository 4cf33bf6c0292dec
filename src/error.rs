//! Error types for detector configuration.

use thiserror::Error;

/// Configuration errors, reported before any per-cell work begins.
///
/// A rejected configuration produces no partial results; the caller is
/// expected to correct the parameters and re-invoke.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CfarError {
    /// Zero training cells makes the threshold-factor exponent divide
    /// by zero.
    #[error("training_cells must be positive")]
    InvalidTrainingCells,

    /// The false-alarm rate must lie in the open interval (0, 1).
    /// Values at or below 0 make the exponentiation undefined; values at
    /// or above 1 give a non-positive factor and a detector that either
    /// always or never triggers.
    #[error("false_alarm_rate must be in (0, 1), got {0}")]
    InvalidFalseAlarmRate(f64),
}
