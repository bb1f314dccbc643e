//! Error types for key and API key operations.

use thiserror::Error;

/// Errors that can occur while encoding, assembling or parsing keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    /// Key string has the wrong length, alphabet or hyphen placement
    #[error("invalid key format")]
    InvalidKeyFormat,

    /// UUID text is not 36 characters long
    #[error("invalid UUID length: expected 36, got {0}")]
    InvalidUuidLength(usize),

    /// UUID text is 36 characters long but is not a hyphenated hex UUID
    #[error("invalid UUID")]
    InvalidUuid,

    /// Raw UUID buffer is not 16 bytes long
    #[error("invalid UUID byte length: expected 16, got {0}")]
    InvalidUuidByteLength(usize),

    /// A key segment does not decode to a 32-bit word
    #[error("invalid base32 encoding")]
    InvalidEncoding,

    /// Prefix is empty at creation or at parse time
    #[error("prefix cannot be empty")]
    EmptyPrefix,

    /// Prefix or entropy contains the `_` separator
    #[error("{0} cannot contain '_'")]
    SeparatorInField(&'static str),

    /// Compound key string is empty
    #[error("API key cannot be empty")]
    EmptyInput,

    /// Compound key string does not split into prefix, body and checksum
    #[error("invalid API key format: expected 3 parts, got {0}")]
    WrongPartCount(usize),

    /// Body is too short to hold a key
    #[error("insufficient length: expected at least 28 characters for key and entropy, got {0}")]
    InsufficientLength(usize),

    /// Checksum is not 8 uppercase hex characters
    #[error("invalid checksum format: {0:?}")]
    InvalidChecksumFormat(String),

    /// Checksum does not match the one recomputed from prefix, key and entropy
    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// Entropy class is not one of 128, 160 or 256 bits
    #[error("unsupported entropy size: {0} bits")]
    UnsupportedEntropySize(u16),
}

/// Result type alias for key operations.
pub type Result<T> = std::result::Result<T, ApiKeyError>;
