use crate::noise::bounded_int;

/// Spoofed `navigator.hardwareConcurrency` for a session.
///
/// The slot hashes an empty discriminator, which degenerates to the raw
/// seed, so the reported count reproduces the long-standing
/// `(seed % 16) * 2` formula bit-for-bit. Counts land on even values in
/// `0..=30`; hosts that refuse to report zero cores clamp on their side.
pub fn hardware_concurrency(seed: u32) -> u32 {
    bounded_int(seed, "", 0, 15) as u32 * 2
}
