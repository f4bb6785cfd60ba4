//! Assembler configuration

use crate::error::PatchError;

/// Validator count used when the caller does not pick one.
pub const DEFAULT_VALIDATOR_COUNT: u32 = 11;

/// Assembler tuning.
///
/// None of these settings change the produced document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Validator slots whose keys are derived concurrently. Results are
    /// always reassembled in index order.
    pub max_concurrent_slots: usize,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            max_concurrent_slots: 1,
        }
    }
}

impl AssemblerConfig {
    pub fn validate(&self) -> Result<(), PatchError> {
        if self.max_concurrent_slots == 0 {
            return Err(PatchError::InvalidConfig(
                "max_concurrent_slots cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style method to set slot concurrency
    pub fn with_max_concurrent_slots(mut self, slots: usize) -> Self {
        self.max_concurrent_slots = slots;
        self
    }
}
