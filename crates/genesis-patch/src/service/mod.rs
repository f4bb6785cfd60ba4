//! Service Layer
//!
//! Orchestrates key derivation and document assembly via the ports.

pub mod assembler;
pub mod config;

pub use assembler::PatchAssembler;
pub use config::AssemblerConfig;
