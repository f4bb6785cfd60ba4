//! Fixed-table key deriver

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{KeyPair, KeyRole, Secret, ValidatorIndex};
use crate::error::DeriveError;
use crate::ports::KeyDeriver;

/// Returns pre-registered public keys by label, ignoring the secret.
///
/// Counts every call so callers can assert that no derivation happened.
/// Unknown labels fail with [`DeriveError::UnknownLabel`].
#[derive(Debug, Default)]
pub struct StaticKeyDeriver {
    keys: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StaticKeyDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register stub keys `owner{i}`, `active{i}` and `prod{i}` for every
    /// index below `count`.
    pub fn with_role_stubs(count: u32) -> Self {
        let mut deriver = Self::new();
        for i in 0..count {
            let index = ValidatorIndex::new(i);
            for role in KeyRole::ALL {
                let stub = match role {
                    KeyRole::Owner => "owner",
                    KeyRole::Active => "active",
                    KeyRole::BlockSigning => "prod",
                };
                deriver.insert(index.label(role), format!("{}{}", stub, i));
            }
        }
        deriver
    }

    /// Builder-style registration of one label.
    pub fn with_key(mut self, label: impl Into<String>, public_key: impl Into<String>) -> Self {
        self.insert(label, public_key);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, public_key: impl Into<String>) {
        self.keys.insert(label.into(), public_key.into());
    }

    /// Number of `derive` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyDeriver for StaticKeyDeriver {
    async fn derive(&self, _secret: &Secret, label: &str) -> Result<KeyPair, DeriveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keys
            .get(label)
            .map(|key| KeyPair::from_public_key(key.as_str()))
            .ok_or_else(|| DeriveError::UnknownLabel(label.to_string()))
    }
}
