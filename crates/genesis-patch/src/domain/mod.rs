//! Domain Layer - Pure patch model
//!
//! This layer contains:
//! - Validator indices, key roles and derivation labels
//! - Key pairs and the operator secret
//! - Genesis record types
//! - The patch document and its invariants
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod document;
pub mod index;
pub mod keys;
pub mod records;

pub use document::{AppendSection, PatchDocument, ReplaceSection, ValidatorSlot};
pub use index::{KeyRole, ValidatorIndex, ACCOUNT_NAME_PREFIX};
pub use keys::{KeyPair, Secret};
pub use records::{AccountRecord, CouncilEntry, ValidatorRecord, WorkerCandidate};
