//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for callers that need a patch
//! - Driven Ports (outbound) - The key derivation boundary

pub mod inbound;
pub mod outbound;

pub use inbound::GenesisPatchApi;
pub use outbound::KeyDeriver;
