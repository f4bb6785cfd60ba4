//! Outbound Ports (Driven Ports)
//!
//! The key deriver is an external collaborator. The assembler only relies on
//! its contract:
//!
//! - identical `(secret, label)` always yields the identical key pair
//! - any failure is reported, never papered over with a default key

use async_trait::async_trait;

use crate::domain::{KeyPair, Secret};
use crate::error::DeriveError;

/// Deterministic key derivation (Driven Port)
#[async_trait]
pub trait KeyDeriver: Send + Sync {
    /// Derive the key pair for `label` under `secret`.
    async fn derive(&self, secret: &Secret, label: &str) -> Result<KeyPair, DeriveError>;
}

