//! The genesis patch document
//!
//! ```text
//! {
//!   append:  { initial_accounts: [AccountRecord, ...] },
//!   replace: {
//!     initial_block_producers: N,
//!     initial_worker_candidates: [],
//!     initial_validator_candidates: [ValidatorRecord, ...],
//!     initial_delegate_candidates: [CouncilEntry, ...]
//!   }
//! }
//! ```
//!
//! ## Invariants
//!
//! - The three record lists have exactly N entries each
//! - Entry `i` of every list is named `"init" + i`
//! - `initial_block_producers == N`
//! - `initial_worker_candidates` is empty

use serde::{Deserialize, Serialize};

use super::index::ValidatorIndex;
use super::keys::KeyPair;
use super::records::{AccountRecord, CouncilEntry, ValidatorRecord, WorkerCandidate};
use crate::error::PatchError;

/// All keys derived for one validator slot.
///
/// Slots are only projected into the three parallel record lists when the
/// document is built, so a slot's records can never drift apart.
#[derive(Clone, Debug)]
pub struct ValidatorSlot {
    pub index: ValidatorIndex,
    pub owner: KeyPair,
    pub active: KeyPair,
    pub block_signing: KeyPair,
}

impl ValidatorSlot {
    pub fn account(&self) -> AccountRecord {
        AccountRecord::new(self.index, &self.owner, &self.active)
    }

    pub fn validator(&self) -> ValidatorRecord {
        ValidatorRecord::new(self.index, &self.block_signing)
    }

    pub fn council_entry(&self) -> CouncilEntry {
        CouncilEntry::new(self.index)
    }
}

/// Entries appended to the base genesis lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendSection {
    pub initial_accounts: Vec<AccountRecord>,
}

/// Entries replacing the base genesis values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceSection {
    pub initial_block_producers: u64,
    pub initial_worker_candidates: Vec<WorkerCandidate>,
    pub initial_validator_candidates: Vec<ValidatorRecord>,
    pub initial_delegate_candidates: Vec<CouncilEntry>,
}

/// Root of the generated patch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchDocument {
    pub append: AppendSection,
    pub replace: ReplaceSection,
}

impl PatchDocument {
    /// Build the document from slots given in ascending index order.
    pub fn from_slots(slots: &[ValidatorSlot]) -> Self {
        Self {
            append: AppendSection {
                initial_accounts: slots.iter().map(ValidatorSlot::account).collect(),
            },
            replace: ReplaceSection {
                initial_block_producers: slots.len() as u64,
                initial_worker_candidates: Vec::new(),
                initial_validator_candidates: slots.iter().map(ValidatorSlot::validator).collect(),
                initial_delegate_candidates: slots
                    .iter()
                    .map(ValidatorSlot::council_entry)
                    .collect(),
            },
        }
    }

    /// Number of validator slots described by the document.
    pub fn validator_count(&self) -> usize {
        self.append.initial_accounts.len()
    }

    /// Check every structural invariant of a generated patch.
    pub fn verify(&self) -> Result<(), PatchError> {
        let accounts = &self.append.initial_accounts;
        let validators = &self.replace.initial_validator_candidates;
        let council = &self.replace.initial_delegate_candidates;
        let n = accounts.len();

        if validators.len() != n || council.len() != n {
            return Err(PatchError::InvariantViolation(format!(
                "list lengths differ: {} accounts, {} validators, {} council entries",
                n,
                validators.len(),
                council.len()
            )));
        }

        if self.replace.initial_block_producers != n as u64 {
            return Err(PatchError::InvariantViolation(format!(
                "initial_block_producers is {} but {} validators are listed",
                self.replace.initial_block_producers, n
            )));
        }

        if !self.replace.initial_worker_candidates.is_empty() {
            return Err(PatchError::InvariantViolation(
                "initial_worker_candidates must be empty".to_string(),
            ));
        }

        for (i, ((account, validator), entry)) in
            accounts.iter().zip(validators).zip(council).enumerate()
        {
            let expected = ValidatorIndex::new(i as u32).account_name();

            if account.name != expected
                || validator.owner_name != expected
                || entry.owner_name != expected
            {
                return Err(PatchError::InvariantViolation(format!(
                    "entry {} is not consistently named {:?}",
                    i, expected
                )));
            }

            if !account.is_lifetime_member {
                return Err(PatchError::InvariantViolation(format!(
                    "account {:?} is not a lifetime member",
                    account.name
                )));
            }
        }

        Ok(())
    }
}
