//! Integration tests across genesis-patch, shared-crypto and the CLI.

pub mod key_tool;
pub mod patch_pipeline;
