use crate::error::{ConfigError, Result};
use crate::GenerationConfig;

impl GenerationConfig {
    /// Reject degenerate parameters before any generation work starts.
    ///
    /// `notes_per_claim` may be zero; every other count must be positive.
    pub fn validate(&self) -> Result<()> {
        if self.patients == 0 {
            return Err(ConfigError::ValidationError(
                "patients must be at least 1".to_string(),
            ));
        }
        if self.providers == 0 {
            return Err(ConfigError::ValidationError(
                "providers must be at least 1".to_string(),
            ));
        }
        if self.claims_per_patient == 0 {
            return Err(ConfigError::ValidationError(
                "claims_per_patient must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
