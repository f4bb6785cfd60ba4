//! # Genesis Telemetry
//!
//! Structured logging for the genesis tooling, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use genesis_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Application code here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GENESIS_LOG_LEVEL` | `warn` | Log filter |
//! | `RUST_LOG` | | Fallback log filter |
//! | `GENESIS_JSON_LOGS` | `false` | Emit JSON lines |
//! | `NO_COLOR` | | Disable ANSI colours |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_LOG_LEVEL};
pub use tracing_setup::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber was already installed
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Initialize logging for the current process.
///
/// Must be called at most once; a second call returns
/// [`TelemetryError::SubscriberInit`].
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_logging(config)
}
