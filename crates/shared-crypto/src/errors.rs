//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Key text does not carry the expected prefix
    #[error("Invalid key prefix: expected {expected:?}")]
    InvalidPrefix {
        /// Prefix the text was expected to start with
        expected: String,
    },

    /// Base58 decoding failed
    #[error("Invalid base58 encoding: {0}")]
    InvalidEncoding(String),

    /// Invalid decoded length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Checksum mismatch on decoded key text
    #[error("Checksum mismatch")]
    ChecksumMismatch,
}
