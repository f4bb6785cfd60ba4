//! # Dev Keys
//!
//! Labelled key pairs derived from a single operator secret:
//!
//! ```text
//! secret_scalar = SHA-256(secret ‖ label)
//! ```
//!
//! The same `(secret, label)` always yields the same key pair, and different
//! labels yield unrelated keys. This is the scheme genesis tooling uses to
//! mint bootstrap validator keys without storing them anywhere.

use crate::ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey};
use crate::encoding::{address_text, encode_public_key, private_key_wif};
use crate::hashing::sha256_many;
use crate::CryptoError;
use zeroize::Zeroizing;

/// Public key / address text prefix used when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "GPH";

/// A key pair derived from `(secret, label)`.
pub struct DevKey {
    keypair: Secp256k1KeyPair,
}

impl DevKey {
    /// Derive the key pair for `label` under `secret`.
    pub fn derive(secret: &str, label: &str) -> Result<Self, CryptoError> {
        let seed = Zeroizing::new(sha256_many(&[secret.as_bytes(), label.as_bytes()]));
        let keypair = Secp256k1KeyPair::from_bytes(*seed)?;
        Ok(Self { keypair })
    }

    /// Compressed public key.
    pub fn public_key(&self) -> Secp256k1PublicKey {
        self.keypair.public_key()
    }

    /// Prefixed public key text.
    pub fn public_key_text(&self, prefix: &str) -> String {
        encode_public_key(prefix, &self.public_key())
    }

    /// Prefixed address text.
    pub fn address_text(&self, prefix: &str) -> String {
        address_text(prefix, &self.public_key())
    }

    /// Private key in Wallet Import Format.
    pub fn private_key_wif(&self) -> String {
        private_key_wif(&self.keypair.to_bytes())
    }
}

impl std::fmt::Debug for DevKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevKey")
            .field("public_key", &self.public_key_text(DEFAULT_KEY_PREFIX))
            .finish_non_exhaustive()
    }
}
