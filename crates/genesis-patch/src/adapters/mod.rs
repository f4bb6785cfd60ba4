//! Adapters Layer (Driven Adapters)
//!
//! Implementations of the `KeyDeriver` port.
//!
//! ## Adapters
//!
//! - `DevKeyDeriver` - In-process SHA-256 dev-key derivation via shared-crypto
//! - `SubprocessKeyDeriver` - Runs an external `get_dev_key`-compatible program
//! - `StaticKeyDeriver` - Fixed label table with call counting, for tests and dry runs

pub mod dev_key;
pub mod static_keys;
pub mod subprocess;

pub use dev_key::DevKeyDeriver;
pub use static_keys::StaticKeyDeriver;
pub use subprocess::{SubprocessKeyDeriver, DEFAULT_KEY_TOOL};
