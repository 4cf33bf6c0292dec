//! Batch detection across a set of named signals.
//!
//! One detector configuration fans out over many independent signals;
//! signals are processed in parallel and results keep the input order.

use crate::detector::CfarDetector;
use crate::result::CfarDetection;
use rayon::prelude::*;
use serde::Serialize;

/// A named magnitude signal ready for detection.
#[derive(Debug, Clone)]
pub struct Signal {
    pub name: String,
    pub sample_rate: u32,
    pub samples: Vec<f64>,
}

/// Detection output for one signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalDetection {
    pub name: String,
    #[serde(flatten)]
    pub detection: CfarDetection,
}

/// Run one detector configuration over every signal in the set.
pub fn detect_all(detector: &CfarDetector, signals: &[Signal]) -> Vec<SignalDetection> {
    signals
        .par_iter()
        .map(|signal| SignalDetection {
            name: signal.name.clone(),
            detection: detector.detect(&signal.samples),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spike_signal(name: &str, spike_at: usize) -> Signal {
        let mut samples = vec![1.0; 30];
        samples[spike_at] = 40.0;
        Signal {
            name: name.to_string(),
            sample_rate: 8000,
            samples,
        }
    }

    #[test]
    fn test_batch_preserves_order_and_names() {
        let detector = CfarDetector::new(4, 1, 0.1).unwrap();
        let signals = vec![
            spike_signal("first", 10),
            spike_signal("second", 20),
            spike_signal("third", 15),
        ];

        let results = detect_all(&detector, &signals);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "first");
        assert_eq!(results[1].name, "second");
        assert_eq!(results[2].name, "third");
        assert_eq!(results[0].detection.peaks, vec![10]);
        assert_eq!(results[1].detection.peaks, vec![20]);
        assert_eq!(results[2].detection.peaks, vec![15]);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let detector = CfarDetector::new(3, 0, 0.2).unwrap();
        let signals = vec![spike_signal("a", 8), spike_signal("b", 22)];

        let results = detect_all(&detector, &signals);
        for (signal, result) in signals.iter().zip(&results) {
            assert_eq!(result.detection, detector.detect(&signal.samples));
        }
    }

    #[test]
    fn test_batch_empty_set() {
        let detector = CfarDetector::new(4, 1, 0.1).unwrap();
        assert!(detect_all(&detector, &[]).is_empty());
    }
}
