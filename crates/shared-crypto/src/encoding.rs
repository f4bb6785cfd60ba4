//! # Key Text Encoding
//!
//! Human-readable forms of key material as consumed by genesis files:
//!
//! - public key: `PREFIX + base58(compressed_pubkey ‖ ripemd160(compressed_pubkey)[0..4])`
//! - address: `PREFIX + base58(addr ‖ ripemd160(addr)[0..4])` with
//!   `addr = ripemd160(sha512(compressed_pubkey))`
//! - private key: WIF, `base58(0x80 ‖ secret ‖ sha256d(0x80 ‖ secret)[0..4])`

use crate::ecdsa::Secp256k1PublicKey;
use crate::hashing::{ripemd160, ripemd160_of_sha512, sha256d};
use crate::CryptoError;
use zeroize::Zeroizing;

/// Length of the trailing checksum appended before base58 encoding.
pub const CHECKSUM_LEN: usize = 4;

/// WIF version byte for mainnet-style private keys.
pub const WIF_VERSION: u8 = 0x80;

const PUBLIC_KEY_LEN: usize = 33;

fn ripemd_checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = ripemd160(data);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&digest[..CHECKSUM_LEN]);
    checksum
}

/// Encode a compressed public key as prefixed base58 text.
pub fn encode_public_key(prefix: &str, key: &Secp256k1PublicKey) -> String {
    let mut payload = Vec::with_capacity(PUBLIC_KEY_LEN + CHECKSUM_LEN);
    payload.extend_from_slice(key.as_bytes());
    payload.extend_from_slice(&ripemd_checksum(key.as_bytes()));
    format!("{}{}", prefix, bs58::encode(payload).into_string())
}

/// Decode prefixed public key text, validating prefix, length, checksum and
/// curve membership.
pub fn decode_public_key(prefix: &str, text: &str) -> Result<Secp256k1PublicKey, CryptoError> {
    let body = text
        .strip_prefix(prefix)
        .ok_or_else(|| CryptoError::InvalidPrefix {
            expected: prefix.to_string(),
        })?;

    let payload = bs58::decode(body)
        .into_vec()
        .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;

    if payload.len() != PUBLIC_KEY_LEN + CHECKSUM_LEN {
        return Err(CryptoError::InvalidKeyLength {
            expected: PUBLIC_KEY_LEN + CHECKSUM_LEN,
            actual: payload.len(),
        });
    }

    let (key, checksum) = payload.split_at(PUBLIC_KEY_LEN);
    if ripemd_checksum(key) != checksum {
        return Err(CryptoError::ChecksumMismatch);
    }

    let mut bytes = [0u8; PUBLIC_KEY_LEN];
    bytes.copy_from_slice(key);
    Secp256k1PublicKey::from_bytes(bytes)
}

/// Encode the address derived from a public key as prefixed base58 text.
pub fn address_text(prefix: &str, key: &Secp256k1PublicKey) -> String {
    let addr = ripemd160_of_sha512(key.as_bytes());
    let mut payload = Vec::with_capacity(addr.len() + CHECKSUM_LEN);
    payload.extend_from_slice(&addr);
    payload.extend_from_slice(&ripemd_checksum(&addr));
    format!("{}{}", prefix, bs58::encode(payload).into_string())
}

/// Encode raw secret key bytes in Wallet Import Format.
pub fn private_key_wif(secret: &[u8; 32]) -> String {
    let mut payload = Zeroizing::new(Vec::with_capacity(1 + secret.len() + CHECKSUM_LEN));
    payload.push(WIF_VERSION);
    payload.extend_from_slice(secret);
    let checksum = sha256d(&payload);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(payload.as_slice()).into_string()
}
