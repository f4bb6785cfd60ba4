//! # Genesis Patch
//!
//! Deterministic generation of the genesis "init patch": initial accounts,
//! block producers and council entries derived from one operator secret.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure patch model, no I/O
//!   - `ValidatorIndex`, `KeyRole`: account names and derivation labels
//!   - `KeyPair`, `Secret`: derivation inputs and outputs
//!   - `PatchDocument`: the document and its invariants
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `GenesisPatchApi`: Driving port (inbound API)
//!   - `KeyDeriver`: Driven port (key derivation boundary)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `PatchAssembler`: Implements `GenesisPatchApi`
//!
//! - **Adapters Layer** (`adapters/`): Key derivers
//!   - `DevKeyDeriver`: in-process dev keys
//!   - `SubprocessKeyDeriver`: external `get_dev_key` program
//!   - `StaticKeyDeriver`: fixed keys
//!
//! - `serializer`: canonical JSON with sorted keys
//! - `output`: stdout / file sink
//!
//! ## Data Flow
//!
//! ```text
//! index ──► derived keys ──► ValidatorSlot ──► PatchDocument ──► JSON ──► OutputTarget
//! ```
//!
//! ## Invariants
//!
//! - The three record lists all hold N entries, entry `i` named `"init" + i`
//! - `initial_block_producers == N`, `initial_worker_candidates == []`
//! - Same secret, same N, deterministic deriver: byte-identical output
//! - Any derivation failure fails the whole run
//!
//! ## Usage Example
//!
//! ```ignore
//! use genesis_patch::{DevKeyDeriver, GenesisPatchApi, OutputTarget, PatchAssembler};
//! use std::sync::Arc;
//!
//! let assembler = PatchAssembler::new(Arc::new(DevKeyDeriver::new()));
//! let text = assembler.render(Some("secret".into()), 11, true).await?;
//! OutputTarget::Stdout.write(&text)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod serializer;
pub mod service;

// Re-exports for convenience
pub use adapters::{DevKeyDeriver, StaticKeyDeriver, SubprocessKeyDeriver, DEFAULT_KEY_TOOL};
pub use domain::{
    AccountRecord, CouncilEntry, KeyPair, KeyRole, PatchDocument, Secret, ValidatorIndex,
    ValidatorRecord, ValidatorSlot, WorkerCandidate,
};
pub use error::{DeriveError, PatchError};
pub use output::OutputTarget;
pub use ports::{GenesisPatchApi, KeyDeriver};
pub use serializer::{parse, serialize};
pub use service::{AssemblerConfig, PatchAssembler};
pub use service::config::DEFAULT_VALIDATOR_COUNT;
