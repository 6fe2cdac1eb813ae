use crate::channels::{
    CLIENT_RECT_BAND, CLIENT_RECT_X, CLIENT_RECT_Y, TEXT_METRICS, TEXT_METRICS_BAND,
};
use crate::noise::{alt_seed, scale_factor};

/// Scale factors for client-rect coordinates, X then Y.
///
/// The Y axis hashes under the bit-flipped seed so the pair is never a
/// byte-identical derivation of the same inputs. Hosts multiply rect
/// coordinates once per document, typically with the document sub-seed.
pub fn client_rect_scales(seed: u32) -> (f64, f64) {
    (
        scale_factor(seed, CLIENT_RECT_X, CLIENT_RECT_BAND),
        scale_factor(alt_seed(seed), CLIENT_RECT_Y, CLIENT_RECT_BAND),
    )
}

/// Scale factor for measured text advances.
pub fn text_metrics_scale(seed: u32) -> f64 {
    scale_factor(seed, TEXT_METRICS, TEXT_METRICS_BAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::derive;

    #[test]
    fn test_scales_stay_inside_window() {
        for seed in [0u32, 1, 42, 123456789, u32::MAX] {
            let (x, y) = client_rect_scales(seed);
            for scale in [x, y, text_metrics_scale(seed)] {
                assert!((0.9999985..=1.0000015).contains(&scale));
            }
        }
    }

    #[test]
    fn test_axes_are_decorrelated() {
        for seed in [7u32, 123456789, 0xC0FFEE] {
            let (x, y) = client_rect_scales(seed);
            assert_ne!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn test_helpers_agree_with_channel_rows() {
        let seed = 123456789;
        let (x, y) = client_rect_scales(seed);
        assert_eq!(derive(seed, CLIENT_RECT_X, "").and_then(|v| v.as_scale()), Some(x));
        assert_eq!(derive(seed, CLIENT_RECT_Y, "").and_then(|v| v.as_scale()), Some(y));
        assert_eq!(
            derive(seed, TEXT_METRICS, "").and_then(|v| v.as_scale()),
            Some(text_metrics_scale(seed))
        );
    }

    #[test]
    fn test_noise_is_sub_visible_at_layout_scale() {
        let (x, _) = client_rect_scales(555666777);
        let width = 1280.0 * x;
        assert!((width - 1280.0).abs() < 0.002);
    }
}
