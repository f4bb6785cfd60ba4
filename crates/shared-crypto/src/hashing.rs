//! # Digests
//!
//! One-shot SHA-2 and RIPEMD-160 helpers used for dev-key seeds, address
//! derivation and base58 checksums.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

/// 256-bit digest.
pub type Hash = [u8; 32];

/// 160-bit digest.
pub type Hash160 = [u8; 20];

/// SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// SHA-256 over several inputs, concatenated.
pub fn sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

/// Double SHA-256, as used by WIF checksums.
pub fn sha256d(data: &[u8]) -> Hash {
    sha256(&sha256(data))
}

/// RIPEMD-160 (one-shot).
pub fn ripemd160(data: &[u8]) -> Hash160 {
    Ripemd160::digest(data).into()
}

/// RIPEMD-160 of SHA-512, the address digest.
pub fn ripemd160_of_sha512(data: &[u8]) -> Hash160 {
    let wide = Sha512::digest(data);
    ripemd160(&wide)
}
