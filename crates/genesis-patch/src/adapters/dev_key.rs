//! In-process dev-key derivation

use async_trait::async_trait;
use shared_crypto::{DevKey, DEFAULT_KEY_PREFIX};
use tracing::trace;

use crate::domain::{KeyPair, Secret};
use crate::error::DeriveError;
use crate::ports::KeyDeriver;

/// Derives keys in-process with the same scheme as the `get_dev_key` tool:
/// private key `SHA-256(secret ‖ label)`, prefixed base58 public key text.
#[derive(Clone, Debug)]
pub struct DevKeyDeriver {
    prefix: String,
}

impl DevKeyDeriver {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_KEY_PREFIX)
    }

    /// Use a chain-specific key prefix instead of `GPH`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for DevKeyDeriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyDeriver for DevKeyDeriver {
    async fn derive(&self, secret: &Secret, label: &str) -> Result<KeyPair, DeriveError> {
        let key = DevKey::derive(secret.expose(), label)?;
        trace!(label, "Derived dev key");

        Ok(KeyPair {
            public_key: key.public_key_text(&self.prefix),
            address: Some(key.address_text(&self.prefix)),
            private_key: Some(key.private_key_wif()),
        })
    }
}
