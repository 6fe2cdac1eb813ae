use crate::channels::{
    AUDIO_CHANNEL_JITTER, AUDIO_JITTER_RANGE, AUDIO_SAMPLE_RATE, SAMPLE_RATE_OFFSET_RANGE,
};
use crate::noise::{alt_seed, signed_unit};

/// Sample rates real audio stacks report. Spoofed rates must land on one
/// of these: an impossible rate is itself a fingerprint.
pub static SUPPORTED_SAMPLE_RATES: [u32; 8] =
    [8000, 11025, 16000, 22050, 44100, 48000, 88200, 96000];

/// Derived sample-rate offset in Hz, within half the configured span on
/// either side of zero.
pub fn sample_rate_offset(seed: u32) -> f64 {
    signed_unit(seed, AUDIO_SAMPLE_RATE) * SAMPLE_RATE_OFFSET_RANGE
}

/// Spoofed `AudioContext.sampleRate`: the hardware rate plus the derived
/// offset, snapped to the nearest supported rate.
pub fn spoofed_sample_rate(seed: u32, base_rate: u32) -> u32 {
    nearest_supported_rate(base_rate as f64 + sample_rate_offset(seed))
}

/// The supported rate closest to a target frequency. Ties resolve to the
/// lower rate.
pub fn nearest_supported_rate(target: f64) -> u32 {
    let mut best = SUPPORTED_SAMPLE_RATES[0];
    let mut best_distance = f64::INFINITY;

    for rate in SUPPORTED_SAMPLE_RATES {
        let distance = (rate as f64 - target).abs();
        if distance < best_distance {
            best = rate;
            best_distance = distance;
        }
    }

    best
}

/// Tiny per-channel jitter for analyser output, derived under the
/// bit-flipped seed so it never correlates with the rate offset.
pub fn channel_jitter(seed: u32) -> f64 {
    signed_unit(alt_seed(seed), AUDIO_CHANNEL_JITTER) * AUDIO_JITTER_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::derive;

    #[test]
    fn test_spoofed_rate_is_always_supported() {
        for seed in 0u32..500 {
            for base in [44100u32, 48000, 96000] {
                let rate = spoofed_sample_rate(seed, base);
                assert!(SUPPORTED_SAMPLE_RATES.contains(&rate));
            }
        }
    }

    #[test]
    fn test_rate_fixtures() {
        assert_eq!(spoofed_sample_rate(123456789, 44100), 44100);
        assert_eq!(spoofed_sample_rate(987654321, 48000), 48000);
    }

    #[test]
    fn test_offset_and_jitter_bounds() {
        for seed in [0u32, 1, 123456789, 0xC0FFEE] {
            assert!(sample_rate_offset(seed).abs() <= SAMPLE_RATE_OFFSET_RANGE / 2.0);
            assert!(channel_jitter(seed).abs() <= AUDIO_JITTER_RANGE / 2.0);
        }
    }

    #[test]
    fn test_nearest_rate_edges() {
        assert_eq!(nearest_supported_rate(0.0), 8000);
        assert_eq!(nearest_supported_rate(1.0e6), 96000);
        assert_eq!(nearest_supported_rate(46050.0), 44100);
    }

    #[test]
    fn test_jitter_uses_the_companion_seed() {
        let seed = 123456789;
        let primary = signed_unit(seed, AUDIO_CHANNEL_JITTER) * AUDIO_JITTER_RANGE;
        assert_ne!(channel_jitter(seed).to_bits(), primary.to_bits());
    }

    #[test]
    fn test_helpers_agree_with_channel_rows() {
        for seed in [0u32, 42, 987654321] {
            assert_eq!(
                derive(seed, AUDIO_SAMPLE_RATE, "").and_then(|v| v.as_f64()),
                Some(sample_rate_offset(seed))
            );
            assert_eq!(
                derive(seed, AUDIO_CHANNEL_JITTER, "").and_then(|v| v.as_f64()),
                Some(channel_jitter(seed))
            );
        }
    }
}
