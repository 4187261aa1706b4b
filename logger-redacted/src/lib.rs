//! Structured logging with identifier redaction
//!
//! Synthetic records are shaped like real ones, so log lines describing them
//! get the same treatment real PHI would: provider identifiers and labelled
//! postal codes are masked (or replaced by a short correlation hash) before
//! they reach the subscriber.
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init_logging, LoggerConfig, LogFormat};
//!
//! let config = LoggerConfig {
//!     format: LogFormat::Json,
//!     ..LoggerConfig::default()
//! };
//! init_logging(&config).expect("logging");
//!
//! logger_redacted::redacted_info!("provider npi {} ready", "1234567890");
//! // Output: "provider npi NPI[...] ready"
//! ```

pub mod redactor;
pub mod macros;
pub mod config;
pub mod error;

pub use redactor::*;
pub use config::*;
pub use error::*;

#[doc(hidden)]
pub use tracing as __tracing;

use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

lazy_static! {
    static ref DEFAULT_REDACTOR: PiiRedactor = PiiRedactor::new(RedactionConfig::default());
}

static REDACTION_ENABLED: AtomicBool = AtomicBool::new(true);

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level` when set.
pub fn init_logging(config: &LoggerConfig) -> LoggerResult<()> {
    REDACTION_ENABLED.store(config.redaction_enabled, Ordering::Relaxed);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| LoggerError::InvalidFilter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .try_init(),
    }
    .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Redact a message with the process-wide default rules
pub fn redact(message: &str) -> String {
    if REDACTION_ENABLED.load(Ordering::Relaxed) {
        DEFAULT_REDACTOR.redact(message)
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_redaction_masks_npi() {
        let redacted = redact("npi 1234567890");
        assert!(!redacted.contains("1234567890"));
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        // only meaningful when RUST_LOG is not set in the test environment
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggerConfig {
            level: "claims=notalevel".to_string(),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(LoggerError::InvalidFilter(_))
        ));
    }
}
