//! Key pairs returned by derivers and the operator secret

use std::fmt;

use serde_json::Value;
use zeroize::Zeroizing;

use crate::error::{DeriveError, PatchError};

/// Operator-supplied generation secret.
///
/// Never empty. Redacted in `Debug`, zeroized on drop.
#[derive(Clone)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    /// Wrap a secret, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, PatchError> {
        let value = Zeroizing::new(value.into());
        if value.is_empty() {
            return Err(PatchError::MissingSecret);
        }
        Ok(Self(value))
    }

    /// Wrap an optional secret; `None` is a configuration error.
    pub fn from_option(value: Option<String>) -> Result<Self, PatchError> {
        match value {
            Some(value) => Self::new(value),
            None => Err(PatchError::MissingSecret),
        }
    }

    /// Raw secret text, for handing to a deriver.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

/// Derived key pair.
///
/// Only `public_key` ends up in the patch.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: String,
    pub address: Option<String>,
    pub private_key: Option<String>,
}

impl KeyPair {
    pub fn from_public_key(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            address: None,
            private_key: None,
        }
    }

    /// Parse key tool stdout: a JSON array whose first element carries a
    /// string `public_key`.
    ///
    /// Other fields are optional; non-string values are ignored.
    pub fn from_tool_output(stdout: &[u8]) -> Result<Self, DeriveError> {
        let entries: Vec<Value> = serde_json::from_slice(stdout)
            .map_err(|e| DeriveError::MalformedOutput(e.to_string()))?;

        let first = entries.into_iter().next().ok_or(DeriveError::EmptyOutput)?;
        let text = |field: &str| first.get(field).and_then(Value::as_str).map(str::to_owned);

        Ok(Self {
            public_key: text("public_key").ok_or(DeriveError::MissingPublicKey)?,
            address: text("address"),
            private_key: text("private_key"),
        })
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
