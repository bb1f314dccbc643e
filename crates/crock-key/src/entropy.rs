//! Random entropy segment for API keys.

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::config::EntropySize;
use crate::crockford;

/// Generate an entropy segment of the given class from the OS random source.
///
/// The result is uppercase Crockford text of exactly `size.chars()` symbols.
pub fn generate_entropy(size: EntropySize) -> String {
    generate_entropy_with(&mut rand::rngs::OsRng, size)
}

/// Generate an entropy segment from a caller-supplied CSPRNG.
///
/// Draws `ceil(chars * 8 / 5)` random bytes, whitens them through SHA-256
/// and keeps the first `chars` symbols of the encoded digest. The digest is
/// 52 symbols long, which covers every class.
pub fn generate_entropy_with<R: RngCore + CryptoRng>(rng: &mut R, size: EntropySize) -> String {
    let chars = size.chars();

    let mut seed = Zeroizing::new(vec![0u8; (chars * 8).div_ceil(5)]);
    rng.fill_bytes(&mut seed);

    let digest = Sha256::digest(seed.as_slice());

    let mut encoded = crockford::encode(&digest).to_ascii_uppercase();
    encoded.truncate(chars);
    encoded
}
