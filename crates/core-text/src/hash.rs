//! Digest primitives.

use sha2::{Digest, Sha256};

/// 32-bit djb2-xor fold.
///
/// Folds over the UTF-16 code units of the input, not its UTF-8 bytes; the
/// published golden digests were produced by a UTF-16-native implementation
/// and every stored fingerprint depends on reproducing them bit-for-bit.
pub fn hash32(input: &str) -> u32 {
    let mut h: u32 = 5381;
    for unit in input.encode_utf16() {
        h = (h << 5).wrapping_add(h) ^ u32::from(unit);
    }
    h
}

/// [`hash32`] rendered as 8 lowercase hex characters, the digest format used
/// throughout the system.
pub fn hash_hex(input: &str) -> String {
    format!("{:08x}", hash32(input))
}

/// Real SHA-256 over the canonical form of `raw`, hex-encoded.
///
/// For capture-time text hashes that may be stored and compared across
/// tools. Not used by the fingerprint engine.
pub fn sha256_hex(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(crate::normalize(raw).as_bytes());
    format!("{:x}", hasher.finalize())
}
