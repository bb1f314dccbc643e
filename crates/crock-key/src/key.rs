//! Base32-Crockford representation of a UUID.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::crockford::{self, WORD_LEN};
use crate::error::{ApiKeyError, Result};

/// Length of a key without hyphens.
pub const KEY_LEN: usize = 28;

/// Length of a key with hyphens between its four segments.
pub const HYPHENATED_KEY_LEN: usize = 31;

/// Length of a hyphenated UUID in text form.
pub const UUID_TEXT_LEN: usize = 36;

const HYPHEN_POSITIONS: [usize; 3] = [7, 15, 23];

/// A UUID encoded as four 7-symbol Crockford segments, one per 4-byte group.
///
/// Each 32-bit group is encoded on its own, so every segment is exactly
/// seven symbols wide and the key is always 28 characters, or 31 with
/// hyphens at positions 7, 15 and 23.
///
/// # Example
///
/// ```rust
/// use crock_key::Key;
///
/// let key = Key::encode("d1756360-5da0-40df-9926-a76abff5601d", false).unwrap();
/// assert_eq!(key.as_str(), "38QARV01ET0G6Z2CJD9VA2ZZAR0X");
/// assert_eq!(key.to_uuid().unwrap(), "d1756360-5da0-40df-9926-a76abff5601d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    value: String,
}

impl Key {
    /// Validate and wrap an existing key string.
    ///
    /// The value is stored verbatim: case and hyphens are kept as given.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ApiKeyError::InvalidKeyFormat);
        }
        Ok(Self { value })
    }

    /// Whether `value` is a well-formed key in either layout.
    pub fn is_valid(value: &str) -> bool {
        segments(value).is_some()
    }

    /// Encode a hyphenated UUID string (36 characters).
    pub fn encode(uuid: &str, with_hyphens: bool) -> Result<Self> {
        let len = uuid.chars().count();
        if len != UUID_TEXT_LEN {
            return Err(ApiKeyError::InvalidUuidLength(len));
        }
        let uuid = Uuid::try_parse(uuid).map_err(|_| ApiKeyError::InvalidUuid)?;
        Self::new(join_words(&uuid, with_hyphens))
    }

    /// Encode a UUID value.
    pub fn from_uuid(uuid: &Uuid, with_hyphens: bool) -> Self {
        Self {
            value: join_words(uuid, with_hyphens),
        }
    }

    /// Decode back into a UUID value.
    pub fn uuid(&self) -> Result<Uuid> {
        let segments = segments(&self.value).ok_or(ApiKeyError::InvalidKeyFormat)?;
        let mut bytes = [0u8; 16];
        for (chunk, segment) in bytes.chunks_exact_mut(4).zip(segments) {
            chunk.copy_from_slice(&crockford::decode_word(segment)?);
        }
        Ok(Uuid::from_bytes(bytes))
    }

    /// Decode back into canonical lowercase hyphenated UUID text.
    pub fn to_uuid(&self) -> Result<String> {
        self.uuid().map(|uuid| uuid.hyphenated().to_string())
    }

    /// The key as stored.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the key uses the 31-character hyphenated layout.
    pub fn has_hyphens(&self) -> bool {
        self.value.len() == HYPHENATED_KEY_LEN
    }

    /// The 28-character uppercase form, as embedded in an API key.
    pub fn to_compact(&self) -> Self {
        let value = match segments(&self.value) {
            Some(segments) => segments.concat().to_ascii_uppercase(),
            None => self.value.to_ascii_uppercase(),
        };
        Self { value }
    }
}

/// Split a key into its four segments, validating layout and alphabet.
fn segments(value: &str) -> Option<[&str; 4]> {
    let bytes = value.as_bytes();
    let starts = match bytes.len() {
        KEY_LEN => [0, 7, 14, 21],
        HYPHENATED_KEY_LEN => {
            if HYPHEN_POSITIONS.iter().any(|&i| bytes[i] != b'-') {
                return None;
            }
            [0, 8, 16, 24]
        }
        _ => return None,
    };

    let mut out = [""; 4];
    for (slot, start) in out.iter_mut().zip(starts) {
        let segment = value.get(start..start + WORD_LEN)?;
        if !segment.bytes().all(crockford::is_symbol) {
            return None;
        }
        *slot = segment;
    }
    Some(out)
}

fn join_words(uuid: &Uuid, with_hyphens: bool) -> String {
    let words: Vec<String> = uuid
        .as_bytes()
        .chunks_exact(4)
        .map(|chunk| crockford::encode_word([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    words.join(if with_hyphens { "-" } else { "" })
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Key {
    type Err = ApiKeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = ApiKeyError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Key {
    type Error = ApiKeyError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "d1756360-5da0-40df-9926-a76abff5601d";
    const KEY: &str = "38QARV01ET0G6Z2CJD9VA2ZZAR0X";
    const HYPHENATED: &str = "38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X";

    #[test]
    fn test_encode_known_uuid() {
        let key = Key::encode(UUID, false).unwrap();
        assert_eq!(key.as_str(), KEY);
        assert!(!key.has_hyphens());
    }

    #[test]
    fn test_encode_with_hyphens() {
        let key = Key::encode(UUID, true).unwrap();
        assert_eq!(key.as_str(), HYPHENATED);
        assert!(key.has_hyphens());
        for i in HYPHEN_POSITIONS {
            assert_eq!(key.as_str().as_bytes()[i], b'-');
        }
    }

    #[test]
    fn test_decode_known_key() {
        assert_eq!(Key::new(KEY).unwrap().to_uuid().unwrap(), UUID);
        assert_eq!(Key::new(HYPHENATED).unwrap().to_uuid().unwrap(), UUID);
    }

    #[test]
    fn test_decode_lowercase_key() {
        let key = Key::new(KEY.to_lowercase()).unwrap();
        assert_eq!(key.as_str(), KEY.to_lowercase());
        assert_eq!(key.to_uuid().unwrap(), UUID);
    }

    #[test]
    fn test_encode_uppercase_uuid_normalizes() {
        let key = Key::encode(&UUID.to_uppercase(), false).unwrap();
        assert_eq!(key.as_str(), KEY);
        assert_eq!(key.to_uuid().unwrap(), UUID);
    }

    #[test]
    fn test_nil_and_max_uuid() {
        let nil = Key::from_uuid(&Uuid::nil(), false);
        assert_eq!(nil.as_str(), "0".repeat(KEY_LEN));
        assert_eq!(nil.uuid().unwrap(), Uuid::nil());

        let max = Key::from_uuid(&Uuid::from_bytes([0xff; 16]), false);
        assert_eq!(max.as_str(), "3ZZZZZZ".repeat(4));
        assert_eq!(max.uuid().unwrap(), Uuid::from_bytes([0xff; 16]));
    }

    #[test]
    fn test_random_roundtrip() {
        for _ in 0..64 {
            let uuid = Uuid::new_v4();
            for hyphens in [false, true] {
                let key = Key::encode(&uuid.to_string(), hyphens).unwrap();
                let expected = if hyphens { HYPHENATED_KEY_LEN } else { KEY_LEN };
                assert_eq!(key.as_str().len(), expected);
                assert_eq!(key.to_uuid().unwrap(), uuid.to_string());
            }
        }
    }

    #[test]
    fn test_invalid_uuid_length() {
        assert_eq!(
            Key::encode("d1756360-5da0-40df-9926", false),
            Err(ApiKeyError::InvalidUuidLength(23))
        );
        assert_eq!(
            Key::encode("d17563605da040df9926a76abff5601d", false),
            Err(ApiKeyError::InvalidUuidLength(32))
        );
    }

    #[test]
    fn test_invalid_uuid_content() {
        assert_eq!(
            Key::encode("g1756360-5da0-40df-9926-a76abff5601d", false),
            Err(ApiKeyError::InvalidUuid)
        );
        assert_eq!(
            Key::encode("d17563605-da0-40df-9926-a76abff5601d", false),
            Err(ApiKeyError::InvalidUuid)
        );
    }

    #[test]
    fn test_invalid_key_length() {
        assert_eq!(
            Key::new("38QARV01ET0G6Z2CJD9VA2ZZAR0XZ"),
            Err(ApiKeyError::InvalidKeyFormat)
        );
        assert!(Key::new("").is_err());
        assert!(Key::new(&KEY[..27]).is_err());
    }

    #[test]
    fn test_invalid_key_alphabet() {
        for bad in ["I", "L", "O", "U", "i", "l", "o", "u", "_", "!", "é"] {
            let candidate = format!("{}{}", bad, &KEY[1..]);
            assert!(!Key::is_valid(&candidate), "{candidate} accepted");
        }
    }

    #[test]
    fn test_invalid_hyphen_placement() {
        assert!(!Key::is_valid("38QARV01-ET0G6Z2-CJD9VA2-ZZAR0X"));
        assert!(!Key::is_valid("38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0-"));
        assert!(!Key::is_valid("38QARV0-1ET0G6Z-2CJD9VA-2ZZA-0X"));
        assert!(!Key::is_valid("38QARV0_1ET0G6Z_2CJD9VA_2ZZAR0X"));
    }

    #[test]
    fn test_overflowing_segment_fails_decode() {
        let key = Key::new("ZZZZZZZ".repeat(4)).unwrap();
        assert_eq!(key.to_uuid(), Err(ApiKeyError::InvalidEncoding));
    }

    #[test]
    fn test_to_compact() {
        let key = Key::new(HYPHENATED.to_lowercase()).unwrap();
        assert_eq!(key.to_compact().as_str(), KEY);
        assert_eq!(Key::new(KEY).unwrap().to_compact().as_str(), KEY);
    }

    #[test]
    fn test_from_str_and_display() {
        let key: Key = KEY.parse().unwrap();
        assert_eq!(key.to_string(), KEY);
        assert!("nope".parse::<Key>().is_err());
    }
}
