//! Parsing of compound API key strings.

use crate::apikey::{ApiKey, SEPARATOR};
use crate::checksum::is_valid_checksum_format;
use crate::error::{ApiKeyError, Result};
use crate::key::{KEY_LEN, Key};

/// Parse and validate an API key string.
///
/// The string must have the form `{prefix}_{key}{entropy}_{checksum}`:
/// exactly three underscore-separated parts, a non-empty prefix, a body of at
/// least 28 characters whose first 28 form a valid [`Key`], and a checksum of
/// 8 uppercase hex digits equal to the one recomputed from the other fields.
///
/// The entropy segment is whatever follows the key; only the checksum
/// validates it.
pub fn parse(input: &str) -> Result<ApiKey> {
    let result = parse_parts(input);
    if let Err(e) = &result {
        log::debug!("Rejected API key: {}", e);
    }
    result
}

fn parse_parts(input: &str) -> Result<ApiKey> {
    if input.is_empty() {
        return Err(ApiKeyError::EmptyInput);
    }

    // Split by underscore: prefix_{key}{entropy}_checksum
    let parts: Vec<&str> = input.split(SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(ApiKeyError::WrongPartCount(parts.len()));
    }

    let prefix = parts[0];
    let body = parts[1];
    let checksum = parts[2];

    if prefix.is_empty() {
        return Err(ApiKeyError::EmptyPrefix);
    }

    let body_len = body.chars().count();
    if body_len < KEY_LEN {
        return Err(ApiKeyError::InsufficientLength(body_len));
    }

    if !is_valid_checksum_format(checksum) {
        return Err(ApiKeyError::InvalidChecksumFormat(checksum.to_string()));
    }

    // A non-ASCII character inside the first 28 bytes leaves no valid split
    let (key, entropy) = body
        .split_at_checked(KEY_LEN)
        .ok_or(ApiKeyError::InvalidKeyFormat)?;
    let key = Key::new(key)?;

    ApiKey::from_parts(prefix, key, entropy, checksum)
}
