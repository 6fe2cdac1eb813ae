use crate::channels::CANVAS_PERTURB_PERCENT;
use crate::noise::{alt_seed, bounded_int, decide};

/// Whether a pixel gets nudged at all, at a `CANVAS_PERTURB_PERCENT` rate.
pub fn pixel_perturbed(seed: u32, pixel_index: u32) -> bool {
    decide(seed, pixel_index.to_le_bytes(), CANVAS_PERTURB_PERCENT)
}

/// Which RGB lane of a perturbed pixel to displace. Alpha is left alone
/// since alpha noise shows through compositing.
pub fn shuffle_lane(seed: u32, pixel_index: u32) -> i32 {
    bounded_int(seed, pixel_index.to_le_bytes(), 0, 2)
}

/// Direction of the one-step displacement, derived under the bit-flipped
/// seed so lane and direction stay decorrelated.
pub fn shuffle_delta(seed: u32, pixel_index: u32) -> i32 {
    if decide(alt_seed(seed), pixel_index.to_le_bytes(), 50) {
        1
    } else {
        -1
    }
}

/// Nudge an RGBA byte buffer in place.
///
/// A few percent of pixels move one RGB lane by one step, saturating at the
/// byte bounds. Same seed and buffer length produce the same result, so
/// repeated reads of one canvas stay consistent with each other. Trailing
/// bytes short of a full pixel are left untouched.
pub fn perturb_pixels(seed: u32, data: &mut [u8]) {
    for (index, pixel) in data.chunks_exact_mut(4).enumerate() {
        let index = index as u32;
        if !pixel_perturbed(seed, index) {
            continue;
        }
        let lane = shuffle_lane(seed, index) as usize;

        pixel[lane] = if shuffle_delta(seed, index) > 0 {
            pixel[lane].saturating_add(1)
        } else {
            pixel[lane].saturating_sub(1)
        };
    }
}
