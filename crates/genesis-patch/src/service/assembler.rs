//! Patch Assembler
//!
//! For each index in `0..n`, ascending:
//!
//! 1. Derive owner, active and block-signing keys (all three must succeed)
//! 2. Bundle them into a `ValidatorSlot`
//!
//! Slots are then projected into the three parallel record lists. The first
//! failed derivation aborts the run.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::domain::{KeyPair, KeyRole, PatchDocument, Secret, ValidatorIndex, ValidatorSlot};
use crate::error::PatchError;
use crate::ports::{GenesisPatchApi, KeyDeriver};
use crate::serializer;
use crate::service::AssemblerConfig;

/// Patch Assembler implementation
///
/// Implements the `GenesisPatchApi` port using an injected key deriver.
pub struct PatchAssembler<D: KeyDeriver + ?Sized> {
    /// Key deriver (driven port)
    deriver: Arc<D>,
    config: AssemblerConfig,
}

impl<D: KeyDeriver + ?Sized> PatchAssembler<D> {
    /// Create a sequential assembler.
    pub fn new(deriver: Arc<D>) -> Self {
        Self {
            deriver,
            config: AssemblerConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(deriver: Arc<D>, config: AssemblerConfig) -> Self {
        Self { deriver, config }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    async fn derive_role(
        &self,
        secret: &Secret,
        index: ValidatorIndex,
        role: KeyRole,
    ) -> Result<KeyPair, PatchError> {
        let label = index.label(role);
        match self.deriver.derive(secret, &label).await {
            Ok(pair) => Ok(pair),
            Err(source) => Err(PatchError::Derivation {
                index: index.value(),
                label,
                source,
            }),
        }
    }

    async fn derive_slot(
        &self,
        secret: &Secret,
        index: ValidatorIndex,
    ) -> Result<ValidatorSlot, PatchError> {
        let (owner, active, block_signing) = tokio::try_join!(
            self.derive_role(secret, index, KeyRole::Owner),
            self.derive_role(secret, index, KeyRole::Active),
            self.derive_role(secret, index, KeyRole::BlockSigning),
        )?;

        debug!(account = %index.account_name(), "Derived validator slot");

        Ok(ValidatorSlot {
            index,
            owner,
            active,
            block_signing,
        })
    }
}

#[async_trait]
impl<D: KeyDeriver + ?Sized + 'static> GenesisPatchApi for PatchAssembler<D> {
    async fn assemble(
        &self,
        secret: &Secret,
        validator_count: u32,
    ) -> Result<PatchDocument, PatchError> {
        self.config.validate()?;

        info!(
            validator_count,
            concurrency = self.config.max_concurrent_slots,
            "Assembling genesis patch"
        );

        let pending: Vec<_> = (0..validator_count)
            .map(|i| self.derive_slot(secret, ValidatorIndex::new(i)))
            .collect();

        // `buffered` yields results in submission order, i.e. by index.
        let slots: Vec<ValidatorSlot> = stream::iter(pending)
            .buffered(self.config.max_concurrent_slots)
            .try_collect()
            .await?;

        let document = PatchDocument::from_slots(&slots);
        document.verify()?;

        info!(
            accounts = document.append.initial_accounts.len(),
            block_producers = document.replace.initial_block_producers,
            "Genesis patch assembled"
        );

        Ok(document)
    }

    async fn render(
        &self,
        secret: Option<String>,
        validator_count: u32,
        pretty: bool,
    ) -> Result<String, PatchError> {
        let secret = Secret::from_option(secret)?;
        let document = self.assemble(&secret, validator_count).await?;
        serializer::serialize(&document, pretty)
    }
}
