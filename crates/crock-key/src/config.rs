//! Configuration for API key generation.

use serde::{Deserialize, Serialize};

use crate::error::ApiKeyError;

/// Amount of random entropy appended to a key.
///
/// Each class carries the number of Crockford symbols it produces, not a
/// bit count: see [`EntropySize::chars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum EntropySize {
    /// 128-bit class, 14 symbols.
    Bits128,
    /// 160-bit class, 21 symbols.
    #[default]
    Bits160,
    /// 256-bit class, 42 symbols.
    Bits256,
}

impl EntropySize {
    /// All supported classes, smallest first.
    pub const ALL: [EntropySize; 3] = [Self::Bits128, Self::Bits160, Self::Bits256];

    /// Number of Crockford symbols in the entropy segment.
    pub const fn chars(self) -> usize {
        match self {
            Self::Bits128 => 14,
            Self::Bits160 => 21,
            Self::Bits256 => 42,
        }
    }

    /// Nominal bit class.
    pub const fn bits(self) -> u16 {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits256 => 256,
        }
    }
}

impl TryFrom<u16> for EntropySize {
    type Error = ApiKeyError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            128 => Ok(Self::Bits128),
            160 => Ok(Self::Bits160),
            256 => Ok(Self::Bits256),
            other => Err(ApiKeyError::UnsupportedEntropySize(other)),
        }
    }
}

impl From<EntropySize> for u16 {
    fn from(size: EntropySize) -> Self {
        size.bits()
    }
}

/// Configuration for API key generation.
///
/// Values are immutable once built; the `with_*` methods return a new
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeyConfig {
    /// Whether keys are hyphenated. Compound API keys always embed the
    /// 28-character form, so this has no effect on their text.
    pub hyphens: bool,
    /// Entropy class for new keys.
    pub entropy: EntropySize,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            hyphens: true,
            entropy: EntropySize::default(),
        }
    }
}

impl ApiKeyConfig {
    /// Create a config with the given entropy class.
    pub fn new(entropy: EntropySize) -> Self {
        Self {
            entropy,
            ..Self::default()
        }
    }

    /// Set the entropy class.
    pub fn with_entropy(mut self, entropy: EntropySize) -> Self {
        self.entropy = entropy;
        self
    }

    /// Set the hyphen flag.
    pub fn with_hyphens(mut self, hyphens: bool) -> Self {
        self.hyphens = hyphens;
        self
    }
}
