use crate::noise;

/// Channel label for rect noise on the X axis.
pub const CLIENT_RECT_X: &str = "client-rect-x";
/// Channel label for rect noise on the Y axis.
pub const CLIENT_RECT_Y: &str = "client-rect-y";
/// Channel label for text-measurement noise.
pub const TEXT_METRICS: &str = "text-metrics";
/// Channel label for font availability decisions.
pub const FONT_BLOCK: &str = "font-block";
/// Channel label for canvas pixel lane selection.
pub const CANVAS_PIXEL_SHUFFLE: &str = "canvas-pixel-shuffle";
/// Channel label for the spoofed CPU core count.
pub const HARDWARE_CONCURRENCY: &str = "hardware-concurrency";
/// Channel label for the audio sample-rate offset.
pub const AUDIO_SAMPLE_RATE: &str = "audio-sample-rate";
/// Channel label for per-channel audio jitter.
pub const AUDIO_CHANNEL_JITTER: &str = "audio-channel-jitter";

/// Full width of the client-rect scale window.
pub const CLIENT_RECT_BAND: f64 = 0.000003;
/// Full width of the text-metrics scale window.
pub const TEXT_METRICS_BAND: f64 = 0.000003;
/// Block probability for fonts outside the system list, in percent.
pub const FONT_BLOCK_PERCENT: u32 = 30;
/// Per-pixel gate probability for canvas perturbation, in percent.
pub const CANVAS_PERTURB_PERCENT: u32 = 3;
/// Full span of the audio sample-rate offset, in Hz.
pub const SAMPLE_RATE_OFFSET_RANGE: f64 = 4000.0;
/// Full span of the audio channel jitter.
pub const AUDIO_JITTER_RANGE: f64 = 0.00002;

/// Which seed a channel hashes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The session seed as the host provided it.
    Primary,
    /// The bit-flipped companion seed, for second decorrelated axes.
    Secondary,
}

/// How a channel builds the byte sequence it hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiscriminatorRule {
    /// Hash the channel's own label. One value per channel per seed.
    ChannelName,
    /// Hash caller-supplied context bytes (font family, pixel index).
    Caller,
    /// Hash empty input so the result degenerates to the raw seed.
    /// Legacy-compatible formulas rely on this.
    RawSeed,
}

/// Output transform a channel applies to the hash.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    /// Unit-interval value.
    Uniform,
    /// Zero-centered offset spanning `range` in total.
    Offset { range: f64 },
    /// Multiplicative factor centered on `1.0`, spanning `band` in total.
    Scale { band: f64 },
    /// Boolean gate firing at `percent` probability.
    Decide { percent: u32 },
    /// Integer within `[min, max]`, both ends inclusive.
    Bounded { min: i32, max: i32 },
}

/// A derived noise value, tagged by the transform that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseValue {
    Uniform(f64),
    Offset(f64),
    Scale(f64),
    Decision(bool),
    Integer(i32),
}

impl NoiseValue {
    /// The factor for scale channels.
    pub fn as_scale(&self) -> Option<f64> {
        match self {
            NoiseValue::Scale(factor) => Some(*factor),
            _ => None,
        }
    }

    /// The outcome for decision channels.
    pub fn as_decision(&self) -> Option<bool> {
        match self {
            NoiseValue::Decision(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// The value for bounded-integer channels.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            NoiseValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Any float-valued channel output (uniform, offset, or scale).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NoiseValue::Uniform(value) | NoiseValue::Offset(value) | NoiseValue::Scale(value) => {
                Some(*value)
            }
            _ => None,
        }
    }
}

/// One registered noise channel: seed axis, discriminator rule, and output
/// transform. The row is the whole policy; evaluation has no other inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelPolicy {
    pub name: &'static str,
    pub axis: Axis,
    pub discriminator: DiscriminatorRule,
    pub transform: Transform,
}

impl ChannelPolicy {
    /// Run the channel for a seed. `context` supplies the caller bytes for
    /// `DiscriminatorRule::Caller` channels and is ignored otherwise.
    pub fn evaluate(&self, seed: u32, context: &[u8]) -> NoiseValue {
        let seed = match self.axis {
            Axis::Primary => seed,
            Axis::Secondary => noise::alt_seed(seed),
        };
        let discriminator: &[u8] = match self.discriminator {
            DiscriminatorRule::ChannelName => self.name.as_bytes(),
            DiscriminatorRule::Caller => context,
            DiscriminatorRule::RawSeed => b"",
        };

        match self.transform {
            Transform::Uniform => NoiseValue::Uniform(noise::uniform01(seed, discriminator)),
            Transform::Offset { range } => {
                NoiseValue::Offset(noise::signed_unit(seed, discriminator) * range)
            }
            Transform::Scale { band } => {
                NoiseValue::Scale(noise::scale_factor(seed, discriminator, band))
            }
            Transform::Decide { percent } => {
                NoiseValue::Decision(noise::decide(seed, discriminator, percent))
            }
            Transform::Bounded { min, max } => {
                NoiseValue::Integer(noise::bounded_int(seed, discriminator, min, max))
            }
        }
    }
}

/// Registered noise channels. Adding a spoofed signal means adding a row;
/// the `spoof_*` helpers must agree with their row here.
pub static CHANNELS: phf::Map<&'static str, ChannelPolicy> = phf::phf_map! {
    "client-rect-x" => ChannelPolicy {
        name: CLIENT_RECT_X,
        axis: Axis::Primary,
        discriminator: DiscriminatorRule::ChannelName,
        transform: Transform::Scale { band: CLIENT_RECT_BAND },
    },
    "client-rect-y" => ChannelPolicy {
        name: CLIENT_RECT_Y,
        axis: Axis::Secondary,
        discriminator: DiscriminatorRule::ChannelName,
        transform: Transform::Scale { band: CLIENT_RECT_BAND },
    },
    "text-metrics" => ChannelPolicy {
        name: TEXT_METRICS,
        axis: Axis::Primary,
        discriminator: DiscriminatorRule::ChannelName,
        transform: Transform::Scale { band: TEXT_METRICS_BAND },
    },
    "font-block" => ChannelPolicy {
        name: FONT_BLOCK,
        axis: Axis::Primary,
        discriminator: DiscriminatorRule::Caller,
        transform: Transform::Decide { percent: FONT_BLOCK_PERCENT },
    },
    "canvas-pixel-shuffle" => ChannelPolicy {
        name: CANVAS_PIXEL_SHUFFLE,
        axis: Axis::Primary,
        discriminator: DiscriminatorRule::Caller,
        transform: Transform::Bounded { min: 0, max: 2 },
    },
    "hardware-concurrency" => ChannelPolicy {
        name: HARDWARE_CONCURRENCY,
        axis: Axis::Primary,
        discriminator: DiscriminatorRule::RawSeed,
        transform: Transform::Bounded { min: 0, max: 15 },
    },
    "audio-sample-rate" => ChannelPolicy {
        name: AUDIO_SAMPLE_RATE,
        axis: Axis::Primary,
        discriminator: DiscriminatorRule::ChannelName,
        transform: Transform::Offset { range: SAMPLE_RATE_OFFSET_RANGE },
    },
    "audio-channel-jitter" => ChannelPolicy {
        name: AUDIO_CHANNEL_JITTER,
        axis: Axis::Secondary,
        discriminator: DiscriminatorRule::ChannelName,
        transform: Transform::Offset { range: AUDIO_JITTER_RANGE },
    },
};

/// Look up a channel row by name.
pub fn channel(name: &str) -> Option<&'static ChannelPolicy> {
    CHANNELS.get(name)
}

/// Evaluate a registered channel for a seed. Returns `None` for channels
/// no row exists for; precondition violations inside a row still panic.
pub fn derive(seed: u32, channel: &str, context: impl AsRef<[u8]>) -> Option<NoiseValue> {
    CHANNELS
        .get(channel)
        .map(|policy| policy.evaluate(seed, context.as_ref()))
}
