//! Validator slot indices and derivation labels

use std::fmt;

/// Prefix of every generated account name (`init0`, `init1`, ...).
pub const ACCOUNT_NAME_PREFIX: &str = "init";

/// Role a derived key plays for a validator slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Account owner authority
    Owner,
    /// Account active authority
    Active,
    /// Block production signing key
    BlockSigning,
}

impl KeyRole {
    /// All roles derived for one slot.
    pub const ALL: [KeyRole; 3] = [KeyRole::Owner, KeyRole::Active, KeyRole::BlockSigning];

    /// Label prefix passed to the key deriver.
    pub fn label_prefix(&self) -> &'static str {
        match self {
            KeyRole::Owner => "wit-owner-",
            KeyRole::Active => "wit-active-",
            KeyRole::BlockSigning => "wit-block-signing-",
        }
    }
}

/// Position of a validator slot in `[0, N)`.
///
/// Determines the account name and every derivation label of the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatorIndex(u32);

impl ValidatorIndex {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Account name shared by all three records of this slot.
    pub fn account_name(&self) -> String {
        format!("{}{}", ACCOUNT_NAME_PREFIX, self.0)
    }

    /// Derivation label for `role`.
    pub fn label(&self, role: KeyRole) -> String {
        format!("{}{}", role.label_prefix(), self.0)
    }
}

impl fmt::Display for ValidatorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
