//! # Shared Crypto - Dev Key Primitives
//!
//! Deterministic secp256k1 key material for test and bootstrap networks.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ecdsa` | secp256k1 | Key pair and compressed public key |
//! | `hashing` | SHA-256, SHA-512, RIPEMD-160 | Seed and checksum digests |
//! | `encoding` | Base58 + RIPEMD-160 checksum | Prefixed public key, address and WIF text |
//! | `dev_key` | SHA-256(secret ‖ label) | Labelled dev keys from one operator secret |
//!
//! ## Security Properties
//!
//! - Dev keys are fully determined by `(secret, label)`. Anyone holding the
//!   secret holds every derived private key, so they are only fit for
//!   genesis bootstrapping and test networks.
//! - Secret key bytes are zeroized when a key pair is dropped.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dev_key;
pub mod ecdsa;
pub mod encoding;
pub mod errors;
pub mod hashing;

// Re-exports
pub use dev_key::{DevKey, DEFAULT_KEY_PREFIX};
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey};
pub use encoding::{address_text, decode_public_key, encode_public_key, private_key_wif};
pub use errors::CryptoError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
