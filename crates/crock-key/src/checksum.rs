//! CRC32 checksum over the prefix, key and entropy of an API key.

use subtle::ConstantTimeEq;

use crate::key::Key;

/// Length of the checksum segment.
pub const CHECKSUM_LEN: usize = 8;

/// Compute the checksum for an API key.
///
/// CRC32 over `prefix + "_" + key + entropy`, rendered as 8 uppercase hex
/// digits, zero-padded.
pub fn calculate_checksum(prefix: &str, key: &Key, entropy: &str) -> String {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(prefix.as_bytes());
    hasher.update(b"_");
    hasher.update(key.as_str().as_bytes());
    hasher.update(entropy.as_bytes());
    format!("{:08X}", hasher.finalize())
}

/// Whether `checksum` is exactly 8 characters of `[0-9A-F]`.
pub fn is_valid_checksum_format(checksum: &str) -> bool {
    checksum.len() == CHECKSUM_LEN
        && checksum
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}

/// Verify a supplied checksum against the recomputed one.
pub fn verify_checksum(prefix: &str, key: &Key, entropy: &str, checksum: &str) -> bool {
    let expected = calculate_checksum(prefix, key, entropy);
    checksums_equal(&expected, checksum)
}

/// Constant-time comparison of two checksums.
pub(crate) fn checksums_equal(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Key {
        Key::new("38QARV01ET0G6Z2CJD9VA2ZZAR0X").unwrap()
    }

    #[test]
    fn test_known_checksum() {
        let checksum = calculate_checksum("MYPREFIX", &key(), "VNBP1HX5VMAJDWWHK7TZJ");
        assert_eq!(checksum, "E4809599");
    }

    #[test]
    fn test_checksum_zero_padded() {
        for entropy in ["", "0", "00", "A", "ZZZZ", "1234567890"] {
            let checksum = calculate_checksum("p", &key(), entropy);
            assert_eq!(checksum.len(), CHECKSUM_LEN);
            assert!(is_valid_checksum_format(&checksum));
        }
    }

    #[test]
    fn test_checksum_changes_with_each_field() {
        let base = calculate_checksum("app", &key(), "ABC");
        assert_ne!(base, calculate_checksum("apq", &key(), "ABC"));
        assert_ne!(base, calculate_checksum("app", &key(), "ABD"));
        let other = Key::new("38QARV01ET0G6Z2CJD9VA2ZZAR0Y").unwrap();
        assert_ne!(base, calculate_checksum("app", &other, "ABC"));
    }

    #[test]
    fn test_checksum_format() {
        assert!(is_valid_checksum_format("E4809599"));
        assert!(is_valid_checksum_format("0000ABCD"));
        assert!(!is_valid_checksum_format("e4809599"));
        assert!(!is_valid_checksum_format("E480952332"));
        assert!(!is_valid_checksum_format("E480959"));
        assert!(!is_valid_checksum_format("G4809599"));
        assert!(!is_valid_checksum_format(""));
    }

    #[test]
    fn test_verify_checksum() {
        assert!(verify_checksum("MYPREFIX", &key(), "VNBP1HX5VMAJDWWHK7TZJ", "E4809599"));
        assert!(!verify_checksum("MYPREFIX", &key(), "VNBP1HX5VMAJDWWHK7TZJ", "E4809598"));
        assert!(!verify_checksum("MYPREFIX", &key(), "VNBP1HX5VMAJDWWHK7TZJ", "E48095"));
    }
}
