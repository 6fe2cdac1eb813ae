/// FNV-1a hashing with a configurable offset basis.
pub mod hash;
/// Seeded noise derivations.
pub mod noise;

/// Channel policy registry.
pub mod channels;
/// Session configuration types.
pub mod configs;
/// Audio parameter noise.
pub mod spoof_audio;
/// Canvas pixel noise.
pub mod spoof_canvas;
/// Font availability noise.
pub mod spoof_fonts;
/// Hardware concurrency spoofing.
pub mod spoof_hardware;
/// Layout rect and text-metrics noise.
pub mod spoof_rects;

pub use channels::{channel, derive, ChannelPolicy, NoiseValue, CHANNELS};
pub use configs::{random_seed, random_seed_rng, Platform, SpoofConfig};
pub use hash::{fnv1a, FNV_OFFSET_BASIS, FNV_PRIME};
pub use noise::{alt_seed, bounded_int, decide, scale_factor, signed_unit, uniform01};

pub use url;
