use crate::hash::fnv1a;
use crate::spoof_hardware;
use rand::Rng;
use url::Url;

/// The platform a spoofed session presents to pages.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Windows.
    Windows,
    /// Mac.
    Mac,
    /// Linux.
    Linux,
    /// Android.
    Android,
    #[default]
    /// Unknown.
    Unknown,
}

impl Platform {
    /// The `navigator.platform` string pages observe.
    pub fn navigator_platform(&self) -> &'static str {
        match self {
            Platform::Windows => "Win32",
            Platform::Mac => "MacIntel",
            Platform::Linux => "Linux x86_64",
            Platform::Android => "Linux armv8l",
            Platform::Unknown => "",
        }
    }
}

/// Host-side spoofing configuration.
///
/// The host parses whatever its embedder or command-line surface provides
/// and fills this in; the crate never reads configuration sources itself,
/// and every derivation below threads the seed through explicitly.
#[derive(PartialEq, Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpoofConfig {
    /// Session fingerprint seed. `None` means spoofing is off: call sites
    /// skip derivation entirely instead of deriving from a placeholder.
    pub seed: Option<u32>,
    /// Platform presented to pages.
    pub platform: Platform,
    /// Platform version string, e.g. `"10.0.0"`.
    pub platform_version: Option<String>,
    /// Browser brand presented in brand lists.
    pub brand: Option<String>,
    /// Brand version string.
    pub brand_version: Option<String>,
    /// Explicit core-count override. Wins over the seed-derived value.
    pub hardware_concurrency: Option<u32>,
}

impl SpoofConfig {
    /// Config with a seed set and defaults for everything else.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Whether spoofing is on for this session.
    pub fn active(&self) -> bool {
        self.seed.is_some()
    }

    /// Stable per-document sub-seed: the URL host hashed under the base
    /// seed, so per-document channels stay constant within a site while
    /// decorrelating across sites. Documents without a host component
    /// (`data:` and friends) hash the full URL string instead.
    pub fn document_seed(&self, url: &Url) -> Option<u32> {
        let seed = self.seed?;
        let sub_seed = match url.host_str() {
            Some(host) => fnv1a(host.as_bytes(), seed),
            _ => fnv1a(url.as_str().as_bytes(), seed),
        };

        Some(sub_seed)
    }

    /// The core count to report: the explicit override when set, else the
    /// seed-derived value, and `None` when spoofing is off so callers fall
    /// through to the real hardware.
    pub fn effective_hardware_concurrency(&self) -> Option<u32> {
        if !self.active() {
            return None;
        }
        self.hardware_concurrency
            .or_else(|| self.seed.map(spoof_hardware::hardware_concurrency))
    }
}

/// Generate a session seed for hosts that run without a user-supplied one.
/// Persisting it across sessions stays host-owned.
pub fn random_seed() -> u32 {
    random_seed_rng(&mut rand::rng())
}

/// Session-seed generation against a caller-supplied generator.
pub fn random_seed_rng<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random()
}
