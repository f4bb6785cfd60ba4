//! Genesis record types
//!
//! Records reference each other by account name only; there are no object
//! references. Field names match the genesis state's JSON keys.

use serde::{Deserialize, Serialize};

use super::index::ValidatorIndex;
use super::keys::KeyPair;

/// Initial account (`append.initial_accounts`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub name: String,
    pub owner_key: String,
    pub active_key: String,
    pub is_lifetime_member: bool,
}

impl AccountRecord {
    /// Generated accounts are always lifetime members.
    pub fn new(index: ValidatorIndex, owner: &KeyPair, active: &KeyPair) -> Self {
        Self {
            name: index.account_name(),
            owner_key: owner.public_key.clone(),
            active_key: active.public_key.clone(),
            is_lifetime_member: true,
        }
    }
}

/// Initial block producer (`replace.initial_validator_candidates`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRecord {
    /// Must correspond to one of the initial accounts
    pub owner_name: String,
    pub block_producer_key: String,
}

impl ValidatorRecord {
    pub fn new(index: ValidatorIndex, block_signing: &KeyPair) -> Self {
        Self {
            owner_name: index.account_name(),
            block_producer_key: block_signing.public_key.clone(),
        }
    }
}

/// Initial council member (`replace.initial_delegate_candidates`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilEntry {
    /// Must correspond to one of the initial accounts
    pub owner_name: String,
}

impl CouncilEntry {
    pub fn new(index: ValidatorIndex) -> Self {
        Self {
            owner_name: index.account_name(),
        }
    }
}

/// Initial worker (`replace.initial_worker_candidates`).
///
/// Part of the genesis format but never generated here; the list is always
/// emitted empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerCandidate {
    /// Must correspond to one of the initial accounts
    pub owner_name: String,
    pub daily_pay: i64,
}
