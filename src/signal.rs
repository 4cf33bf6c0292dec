//! Signal conditioning helpers.
//!
//! The detector itself only sees magnitude sequences; these helpers turn
//! raw PCM into that form and build time axes for presentation layers.

/// Scale 16-bit PCM to [-1, 1) and rectify to magnitude.
pub fn magnitude_from_pcm16(samples: &[i16]) -> Vec<f64> {
    samples
        .iter()
        .map(|&s| (s as f64 / 32768.0).abs())
        .collect()
}

/// Scale integer PCM of the given bit depth to [-1, 1) and rectify to
/// magnitude. `magnitude_from_pcm16` is the 16-bit special case.
pub fn magnitude_from_pcm(samples: &[i32], bits_per_sample: u16) -> Vec<f64> {
    let scale = (1u64 << (bits_per_sample - 1)) as f64;
    samples.iter().map(|&s| (s as f64 / scale).abs()).collect()
}

/// Rectify an already-scaled signal.
pub fn rectify(samples: &[f64]) -> Vec<f64> {
    samples.iter().map(|s| s.abs()).collect()
}

/// Per-sample timestamps in milliseconds for a signal at `sample_rate`.
pub fn time_axis_ms(len: usize, sample_rate: u32) -> Vec<f64> {
    (0..len)
        .map(|i| 1000.0 * i as f64 / sample_rate as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm16_scaling_and_rectification() {
        let out = magnitude_from_pcm16(&[-32768, 16384, 0, -8192]);
        assert_eq!(out, vec![1.0, 0.5, 0.0, 0.25]);
    }

    #[test]
    fn test_pcm_scaling_matches_16_bit_special_case() {
        let wide: Vec<i32> = vec![-32768, 16384, 0, -8192];
        let narrow: Vec<i16> = vec![-32768, 16384, 0, -8192];
        assert_eq!(magnitude_from_pcm(&wide, 16), magnitude_from_pcm16(&narrow));
    }

    #[test]
    fn test_pcm_scaling_respects_bit_depth() {
        // Full-scale negative at 24 bits is -2^23.
        assert_eq!(magnitude_from_pcm(&[-(1 << 23), 1 << 22], 24), vec![1.0, 0.5]);
    }

    #[test]
    fn test_rectify() {
        assert_eq!(rectify(&[-0.5, 0.25, -1.0]), vec![0.5, 0.25, 1.0]);
    }

    #[test]
    fn test_time_axis() {
        let axis = time_axis_ms(4, 1000);
        assert_eq!(axis, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
