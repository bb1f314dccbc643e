//! Compound API key assembly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::checksum::{calculate_checksum, checksums_equal};
use crate::config::{ApiKeyConfig, EntropySize};
use crate::entropy::generate_entropy;
use crate::error::{ApiKeyError, Result};
use crate::key::Key;
use crate::parse::parse;

/// Separator between prefix, body and checksum.
pub const SEPARATOR: char = '_';

/// An API key: `{prefix}_{key}{entropy}_{checksum}`.
///
/// The key and entropy are concatenated without a separator; the key is
/// always the first 28 characters of the body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiKey {
    prefix: String,
    key: Key,
    entropy: String,
    checksum: String,
}

impl ApiKey {
    /// Create a new API key for a UUID string with 160-bit entropy.
    pub fn new(prefix: impl Into<String>, uuid: &str) -> Result<Self> {
        Self::with_config(prefix, uuid, &ApiKeyConfig::default())
    }

    /// Create a new API key for a UUID string with the given entropy class.
    pub fn with_entropy(prefix: impl Into<String>, uuid: &str, entropy: EntropySize) -> Result<Self> {
        Self::with_config(prefix, uuid, &ApiKeyConfig::default().with_entropy(entropy))
    }

    /// Create a new API key for a UUID string.
    ///
    /// `config.hyphens` is ignored: the embedded key is always the
    /// 28-character form.
    pub fn with_config(prefix: impl Into<String>, uuid: &str, config: &ApiKeyConfig) -> Result<Self> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;

        let key = Key::encode(uuid, false)?;
        let entropy = generate_entropy(config.entropy);

        Ok(Self::assemble(prefix, key, entropy))
    }

    /// Create a new API key from the 16 raw bytes of a UUID.
    pub fn from_bytes(prefix: impl Into<String>, uuid: &[u8], entropy: EntropySize) -> Result<Self> {
        let uuid =
            Uuid::from_slice(uuid).map_err(|_| ApiKeyError::InvalidUuidByteLength(uuid.len()))?;
        Self::with_entropy(prefix, &uuid.hyphenated().to_string(), entropy)
    }

    /// Create a new API key from a UUID value.
    pub fn from_uuid(prefix: impl Into<String>, uuid: &Uuid, entropy: EntropySize) -> Result<Self> {
        Self::with_entropy(prefix, &uuid.hyphenated().to_string(), entropy)
    }

    /// Generate an API key for a fresh UUIDv7 (time-ordered, random).
    pub fn generate(prefix: impl Into<String>, entropy: EntropySize) -> Result<Self> {
        Self::from_uuid(prefix, &Uuid::now_v7(), entropy)
    }

    /// Rebuild an API key from stored parts, verifying the checksum.
    pub fn from_parts(
        prefix: impl Into<String>,
        key: Key,
        entropy: impl Into<String>,
        checksum: impl Into<String>,
    ) -> Result<Self> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;

        // The body locates the key by its 28-character width
        if key.has_hyphens() {
            return Err(ApiKeyError::InvalidKeyFormat);
        }

        let entropy = entropy.into();
        if entropy.contains(SEPARATOR) {
            return Err(ApiKeyError::SeparatorInField("entropy"));
        }

        let candidate = Self {
            prefix,
            key,
            entropy,
            checksum: checksum.into(),
        };

        let expected = candidate.calculate_checksum();
        if !checksums_equal(&expected, &candidate.checksum) {
            log::warn!(
                "API key checksum mismatch for prefix '{}': expected {}, got {}",
                candidate.prefix,
                expected,
                candidate.checksum
            );
            return Err(ApiKeyError::ChecksumMismatch {
                expected,
                actual: candidate.checksum,
            });
        }

        Ok(candidate)
    }

    fn assemble(prefix: String, key: Key, entropy: String) -> Self {
        let checksum = calculate_checksum(&prefix, &key, &entropy);
        Self {
            prefix,
            key,
            entropy,
            checksum,
        }
    }

    /// Parse an API key string. See [`parse`].
    pub fn parse(s: &str) -> Result<Self> {
        parse(s)
    }

    /// Whether `s` is a well-formed API key with a matching checksum.
    pub fn is_valid(s: &str) -> bool {
        parse(s).is_ok()
    }

    /// Recompute the checksum from prefix, key and entropy.
    pub fn calculate_checksum(&self) -> String {
        calculate_checksum(&self.prefix, &self.key, &self.entropy)
    }

    /// The application prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The embedded key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The entropy segment.
    pub fn entropy(&self) -> &str {
        &self.entropy
    }

    /// The checksum segment.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// The UUID carried by the key.
    pub fn uuid(&self) -> Result<Uuid> {
        self.key.uuid()
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(ApiKeyError::EmptyPrefix);
    }
    if prefix.contains(SEPARATOR) {
        return Err(ApiKeyError::SeparatorInField("prefix"));
    }
    Ok(())
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{}{SEPARATOR}{}",
            self.prefix, self.key, self.entropy, self.checksum
        )
    }
}

impl FromStr for ApiKey {
    type Err = ApiKeyError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl Serialize for ApiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value).map_err(serde::de::Error::custom)
    }
}
