//! Human-readable, checksummed API keys built around a UUID.
//!
//! This crate provides functionality for:
//! - Encoding UUIDs as fixed-width Base32-Crockford keys and decoding them back
//! - Assembling API keys from a prefix, a key, random entropy and a CRC32 checksum
//! - Parsing API key strings and verifying their checksum
//!
//! # Key Format
//!
//! A [`Key`] encodes each 4-byte group of a UUID as exactly seven Crockford
//! symbols: 28 characters, or 31 with hyphens at positions 7, 15 and 23.
//!
//! # API Key Format
//!
//! API keys follow the format: `{prefix}_{key}{entropy}_{checksum}`
//!
//! - `prefix`: non-empty, must not contain `_`
//! - `key`: the 28-character key
//! - `entropy`: 14, 21 or 42 Crockford symbols (see [`EntropySize`])
//! - `checksum`: CRC32 of `{prefix}_{key}{entropy}` as 8 uppercase hex digits
//!
//! Example: `MYPREFIX_38QARV01ET0G6Z2CJD9VA2ZZAR0XVNBP1HX5VMAJDWWHK7TZJ_E4809599`
//!
//! The fixed prefix and checksum layout makes leaked keys easy to detect for
//! secret scanners, and the checksum catches transcription errors before any
//! lookup happens.
//!
//! # Example
//!
//! ```rust
//! use crock_key::{ApiKey, EntropySize};
//!
//! // Create a new API key for an existing record
//! let api_key = ApiKey::with_entropy(
//!     "myapp",
//!     "d1756360-5da0-40df-9926-a76abff5601d",
//!     EntropySize::Bits160,
//! )
//! .unwrap();
//!
//! // Give the string to the user...
//! let text = api_key.to_string();
//!
//! // Later, parse it back and recover the UUID
//! let parsed: ApiKey = text.parse().unwrap();
//! assert_eq!(
//!     parsed.key().to_uuid().unwrap(),
//!     "d1756360-5da0-40df-9926-a76abff5601d"
//! );
//! ```

mod apikey;
mod checksum;
mod config;
mod crockford;
mod entropy;
mod error;
mod key;
mod parse;

// Public re-exports
pub use apikey::{ApiKey, SEPARATOR};
pub use checksum::{CHECKSUM_LEN, calculate_checksum, is_valid_checksum_format, verify_checksum};
pub use config::{ApiKeyConfig, EntropySize};
pub use crockford::{ALPHABET, decode as decode_base32, encode as encode_base32};
pub use entropy::{generate_entropy, generate_entropy_with};
pub use error::{ApiKeyError, Result};
pub use key::{HYPHENATED_KEY_LEN, KEY_LEN, Key, UUID_TEXT_LEN};
pub use parse::parse;
