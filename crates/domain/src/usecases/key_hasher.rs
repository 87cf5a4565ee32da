//! Deterministic key hashing for storage addressing

use sha2::{Digest as _, Sha256};

use crate::model::Digest;

/// Compute the SHA-256 digest of the UTF-8 bytes of `input`
///
/// Any string is accepted, including the empty string. The result is the
/// same for the same input within and across process runs.
pub fn hash_key(input: &str) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    Digest::from_hex(format!("{:x}", hasher.finalize()))
}
