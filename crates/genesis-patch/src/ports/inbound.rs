//! Inbound Ports (Driving Ports)

use async_trait::async_trait;

use crate::domain::{PatchDocument, Secret};
use crate::error::PatchError;

/// Primary patch generation API (Driving Port)
#[async_trait]
pub trait GenesisPatchApi: Send + Sync {
    /// Assemble the patch for `validator_count` init validators.
    ///
    /// Fails as a whole if any derivation fails; a partial document is never
    /// returned. `validator_count == 0` yields an empty, valid patch without
    /// calling the deriver.
    async fn assemble(
        &self,
        secret: &Secret,
        validator_count: u32,
    ) -> Result<PatchDocument, PatchError>;

    /// Assemble and serialize in one step.
    ///
    /// A missing secret is reported before any derivation is attempted.
    async fn render(
        &self,
        secret: Option<String>,
        validator_count: u32,
        pretty: bool,
    ) -> Result<String, PatchError>;
}
