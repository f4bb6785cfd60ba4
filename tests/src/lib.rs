//! # Genesis Tooling Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # End-to-end patch generation
//!     ├── patch_pipeline.rs   # assemble → serialize → parse
//!     └── key_tool.rs         # external key tool boundary + CLI run
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p genesis-tests
//!
//! # Benchmarks
//! cargo bench -p genesis-tests
//! ```

pub mod integration;
