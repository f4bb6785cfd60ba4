//! External key tool adapter
//!
//! Invokes `<program> [args..] <secret> <label>` once per derivation and
//! parses the JSON array it prints, e.g.
//!
//! ```text
//! [{"private_key":"5K...","public_key":"GPH6...","address":"GPH..."}]
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{trace, warn};

use crate::domain::{KeyPair, Secret};
use crate::error::DeriveError;
use crate::ports::KeyDeriver;

/// Key tool location relative to the chain source tree.
pub const DEFAULT_KEY_TOOL: &str = "programs/genesis_util/get_dev_key";

/// Runs a `get_dev_key`-compatible program for every derivation.
///
/// The secret is passed as an argument and is never logged. Leading
/// arguments let an interpreter run the tool, e.g. `python3 get_dev_key.py`.
#[derive(Clone, Debug)]
pub struct SubprocessKeyDeriver {
    program: PathBuf,
    args: Vec<OsString>,
}

impl SubprocessKeyDeriver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments passed before `<secret> <label>`.
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl Default for SubprocessKeyDeriver {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_TOOL)
    }
}

#[async_trait]
impl KeyDeriver for SubprocessKeyDeriver {
    async fn derive(&self, secret: &Secret, label: &str) -> Result<KeyPair, DeriveError> {
        trace!(program = %self.program.display(), label, "Invoking key tool");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(secret.expose())
            .arg(label)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| DeriveError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(label, status = %output.status, "Key tool failed");
            return Err(DeriveError::ToolExited {
                status: output.status.to_string(),
                stderr,
            });
        }

        KeyPair::from_tool_output(&output.stdout)
    }
}
