use crate::hash::fnv1a;

/// Full span of the 32-bit hash output, the normalization denominator.
const HASH_SPAN: f64 = 4294967295.0;

/// Derive a stable unit-interval value for a seed and discriminator.
///
/// The seed enters the hash as its offset basis, so different seeds produce
/// unrelated streams for the same discriminator. Same inputs always return
/// the same bits. The value is `fnv1a(discriminator, seed) / (2^32 - 1)`,
/// so the closed upper endpoint is reachable only for the single hash value
/// `u32::MAX`.
#[inline]
pub fn uniform01(seed: u32, discriminator: impl AsRef<[u8]>) -> f64 {
    fnv1a(discriminator.as_ref(), seed) as f64 / HASH_SPAN
}

/// Derive a stable value centered on zero, within `[-0.5, 0.5]`.
#[inline]
pub fn signed_unit(seed: u32, discriminator: impl AsRef<[u8]>) -> f64 {
    uniform01(seed, discriminator) - 0.5
}

/// Derive a multiplicative factor centered on `1.0`.
///
/// `band` is the full width of the noise window: the result always lies
/// within `[1 - band / 2, 1 + band / 2]`. Layout-facing channels use bands
/// small enough to survive rounding (e.g. `0.000003`), but the width is the
/// caller's policy, not this function's.
#[inline]
pub fn scale_factor(seed: u32, discriminator: impl AsRef<[u8]>, band: f64) -> f64 {
    1.0 + signed_unit(seed, discriminator) * band
}

/// Make a stable yes/no decision at the given probability.
///
/// The decision is `fnv1a(discriminator, seed) % 100 < probability_percent`:
/// 0 never fires, 100 always fires.
///
/// # Panics
///
/// Panics if `probability_percent` exceeds 100. An out-of-range probability
/// is a caller bug and is never clamped.
#[inline]
pub fn decide(seed: u32, discriminator: impl AsRef<[u8]>, probability_percent: u32) -> bool {
    assert!(
        probability_percent <= 100,
        "probability_percent must be at most 100, got {probability_percent}"
    );
    fnv1a(discriminator.as_ref(), seed) % 100 < probability_percent
}

/// Derive a stable integer within `[min, max]`, both ends inclusive.
///
/// The hash is reduced modulo the range width. Width arithmetic runs in
/// 64 bits, so the full `i32` range is accepted.
///
/// # Panics
///
/// Panics if `max < min`.
#[inline]
pub fn bounded_int(seed: u32, discriminator: impl AsRef<[u8]>, min: i32, max: i32) -> i32 {
    assert!(max >= min, "bounded_int range is empty: [{min}, {max}]");
    let width = max as i64 - min as i64 + 1;
    let offset = fnv1a(discriminator.as_ref(), seed) as i64 % width;

    (min as i64 + offset) as i32
}

/// Bit-flipped companion seed for a second decorrelated noise axis.
///
/// Paired channels (rect X/Y, audio rate/jitter) hash the same
/// discriminator under `seed` and `alt_seed(seed)` so the two derivations
/// are never byte-identical.
#[inline]
pub const fn alt_seed(seed: u32) -> u32 {
    !seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform01_deterministic_and_in_range() {
        let first = uniform01(123456789, "Arial");
        let second = uniform01(123456789, "Arial");
        assert_eq!(first.to_bits(), second.to_bits());

        for seed in [0u32, 1, 42, 123456789, u32::MAX] {
            let value = uniform01(seed, "client-rect-x");
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_signed_unit_centered() {
        for seed in [0u32, 7, 999, 0xC0FFEE] {
            let value = signed_unit(seed, "text-metrics");
            assert!((-0.5..=0.5).contains(&value));
        }
    }

    #[test]
    fn test_scale_factor_window() {
        let scale = scale_factor(555666777, "client-rect-x", 0.000003);
        assert!((0.9999985..=1.0000015).contains(&scale));
        assert_eq!(scale_factor(42, "anything", 0.0), 1.0);
    }

    #[test]
    fn test_decide_threshold_bounds() {
        for seed in 0u32..200 {
            assert!(!decide(seed, "font", 0));
            assert!(decide(seed, "font", 100));
        }
        // Fixed vector: fnv1a(b"SomeUncommonFont", 987654321) % 100 == 10.
        assert!(decide(987654321, "SomeUncommonFont", 30));
        assert!(!decide(987654321, "SomeUncommonFont", 10));
    }

    #[test]
    #[should_panic(expected = "probability_percent")]
    fn test_decide_rejects_out_of_range_probability() {
        decide(1, "font", 101);
    }

    #[test]
    fn test_bounded_int_inclusive_range() {
        for seed in [0u32, 3, 77, 123456789] {
            let value = bounded_int(seed, "hw-concurrency", 0, 15);
            assert!((0..=15).contains(&value));
        }
        assert_eq!(bounded_int(9, "anything", 6, 6), 6);
        // Degenerates to the raw seed on empty input.
        assert_eq!(bounded_int(123456789, "", 0, 15), (123456789 % 16) as i32);
    }

    #[test]
    fn test_bounded_int_full_i32_range_does_not_overflow() {
        let _ = bounded_int(0xDEADBEEF, "wide", i32::MIN, i32::MAX);
        let narrow = bounded_int(5, "negatives", -8, -1);
        assert!((-8..=-1).contains(&narrow));
    }

    #[test]
    #[should_panic(expected = "range is empty")]
    fn test_bounded_int_rejects_inverted_range() {
        bounded_int(1, "bad", 4, 3);
    }

    #[test]
    fn test_alt_seed_is_an_involution() {
        for seed in [0u32, 1, 0xFFFF_FFFF, 123456789] {
            assert_eq!(alt_seed(alt_seed(seed)), seed);
            assert_ne!(alt_seed(seed), seed);
        }
    }
}
