//! Error types for genesis patch generation

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors that abort patch generation
///
/// Every variant is terminal: no partial document is ever produced.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("missing required parameter --secret")]
    MissingSecret,

    #[error("Invalid assembler configuration: {0}")]
    InvalidConfig(String),

    #[error("Key derivation failed for validator {index} (label {label:?}): {source}")]
    Derivation {
        index: u32,
        label: String,
        #[source]
        source: DeriveError,
    },

    #[error("Patch invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write patch to {target}: {source}")]
    Output {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from key derivers
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("Failed to launch key tool {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Key tool exited with {status}: {stderr}")]
    ToolExited { status: String, stderr: String },

    #[error("Malformed key tool output: {0}")]
    MalformedOutput(String),

    #[error("Key tool returned no key pairs")]
    EmptyOutput,

    #[error("Key tool output has no public_key field")]
    MissingPublicKey,

    #[error("No key registered for label {0:?}")]
    UnknownLabel(String),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
