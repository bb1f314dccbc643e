//! Base32-Crockford codec.
//!
//! Byte strings are encoded as a big-endian bit stream without padding.
//! Decoding is case-insensitive and rejects `I`, `L`, `O` and `U`.

use std::sync::LazyLock;

use data_encoding::{Encoding, Specification};

use crate::error::{ApiKeyError, Result};

/// Crockford's Base32 alphabet (0-9, A-Z without I, L, O, U).
pub const ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Number of symbols needed to carry a 32-bit word (ceil(32 / 5)).
pub const WORD_LEN: usize = 7;

fn specification() -> Specification {
    let mut spec = Specification::new();
    spec.symbols.push_str(ALPHABET);
    spec.translate.from.push_str(&ALPHABET[10..].to_ascii_lowercase());
    spec.translate.to.push_str(&ALPHABET[10..]);
    spec
}

// Built only from the constant alphabet, so it cannot fail at runtime;
// `test_specification_is_valid` pins that.
static CROCKFORD: LazyLock<Encoding> = LazyLock::new(|| {
    specification()
        .encoding()
        .expect("crockford alphabet is a valid base32 specification")
});

/// Encode bytes as uppercase Crockford symbols.
pub fn encode(bytes: &[u8]) -> String {
    CROCKFORD.encode(bytes)
}

/// Decode Crockford symbols (either case) back into bytes.
pub fn decode(symbols: &str) -> Result<Vec<u8>> {
    CROCKFORD
        .decode(symbols.as_bytes())
        .map_err(|_| ApiKeyError::InvalidEncoding)
}

/// Encode a 32-bit big-endian word as a number, left-padded with '0' to
/// exactly [`WORD_LEN`] symbols.
pub fn encode_word(word: [u8; 4]) -> String {
    // A leading zero byte shifts the 32 bits to the end of a 40-bit block,
    // so the stream encoding equals the numeric one behind one extra '0'.
    let mut block = [0u8; 5];
    block[1..].copy_from_slice(&word);
    let mut symbols = CROCKFORD.encode(&block);
    symbols.remove(0);
    symbols
}

/// Decode exactly [`WORD_LEN`] symbols into a 32-bit big-endian word.
///
/// Seven symbols carry 35 bits; values above `u32::MAX` (a leading symbol
/// greater than `3`) are rejected.
pub fn decode_word(symbols: &str) -> Result<[u8; 4]> {
    if symbols.len() != WORD_LEN {
        return Err(ApiKeyError::InvalidEncoding);
    }
    let block = decode(&format!("0{symbols}"))?;
    match block.as_slice() {
        [0, a, b, c, d] => Ok([*a, *b, *c, *d]),
        _ => Err(ApiKeyError::InvalidEncoding),
    }
}

/// Whether `c` is a Crockford digit in either case.
pub fn is_symbol(c: u8) -> bool {
    match c.to_ascii_uppercase() {
        b'I' | b'L' | b'O' | b'U' => false,
        upper => upper.is_ascii_digit() || upper.is_ascii_uppercase(),
    }
}
