use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::codes;

/// Record families produced by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Patient,
    Provider,
    DiagnosisCode,
    ProcedureCode,
    Claim,
    Note,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Patient => "patient",
            EntityKind::Provider => "provider",
            EntityKind::DiagnosisCode => "diagnosis_code",
            EntityKind::ProcedureCode => "procedure_code",
            EntityKind::Claim => "claim",
            EntityKind::Note => "note",
        };
        f.write_str(name)
    }
}

/// A constructed record broke one of its invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{code}] {entity}.{field}: {message}")]
pub struct ValidationError {
    pub entity: EntityKind,
    pub field: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        entity: EntityKind,
        field: &'static str,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entity,
            field,
            code,
            message: message.into(),
        }
    }
}

/// Top-level error for a generation run
#[derive(Error, Debug)]
pub enum SynthError {
    /// Record invariant violations
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Degenerate generation parameters
    #[error("Configuration error: {message}")]
    Configuration { code: &'static str, message: String },

    /// Flat-file export failures
    #[error("Export error: {0}")]
    Export(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SynthError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::configuration_with_code(codes::configuration::DEGENERATE_PARAMETER, message)
    }

    pub fn configuration_with_code(code: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            code,
            message: message.into(),
        }
    }

    /// Structured error code for reporting
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::Validation(e) => e.code,
            SynthError::Configuration { code, .. } => *code,
            SynthError::Export(_) => codes::export::WRITE_FAILED,
            SynthError::Other(_) => "INTERNAL_9001",
        }
    }
}

/// Result type alias for generation operations
pub type SynthResult<T> = std::result::Result<T, SynthError>;

/// Log an error with its structured code
pub fn log_error(context: &str, error: &SynthError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "Generation run failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(
            EntityKind::Claim,
            "total_paid",
            codes::validation::INVALID_AMOUNT,
            "paid exceeds charge",
        );
        assert_eq!(
            err.to_string(),
            "[VALIDATION_1004] claim.total_paid: paid exceeds charge"
        );
    }

    #[test]
    fn test_synth_error_carries_validation_code() {
        let err: SynthError = ValidationError::new(
            EntityKind::Provider,
            "npi",
            codes::validation::INVALID_IDENTIFIER,
            "not 10 digits",
        )
        .into();
        assert_eq!(err.code(), "VALIDATION_1001");
        assert!(matches!(err, SynthError::Validation(_)));
    }

    #[test]
    fn test_configuration_error_code() {
        let err = SynthError::configuration("patients must be at least 1");
        assert_eq!(err.code(), codes::configuration::DEGENERATE_PARAMETER);
        assert!(err.to_string().contains("patients must be at least 1"));

        let err = SynthError::configuration_with_code(
            codes::configuration::EMPTY_CATALOG,
            "no diagnosis codes",
        );
        assert_eq!(err.code(), "CONFIG_2002");
    }
}
