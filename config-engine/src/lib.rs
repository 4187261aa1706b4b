//! Generation parameter management for the synthetic claims generator
//! 
//! `GenerationConfig` is the single configuration surface of a run: record
//! counts, the seed, the reference date every sampling window ends at, and
//! the logging/export knobs used by the command line.
//! 
//! # Supported Sources
//! 
//! - **Defaults**: the values below
//! - **Local Files**: TOML or YAML
//! - **Environment Variables**: `CLAIMGEN_*`, nested keys split on `__`
//! - **Explicit overrides**: any `Serialize` value, typically parsed CLI flags
//! 
//! # Example
//! 
//! ```rust,no_run
//! use config_engine::{ConfigLoader, ENV_PREFIX};
//! 
//! let config = ConfigLoader::new()
//!     .with_file("claimgen.toml")?
//!     .with_env(ENV_PREFIX)
//!     .load()?;
//! 
//! println!("generating {} patients with seed {}", config.patients, config.seed);
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod engine;
pub mod validation;
pub mod error;

pub use engine::*;
pub use error::*;

use chrono::{NaiveDate, Utc};
use logger_redacted::LoggerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Run seed; every component stream is derived from it
    pub seed: u64,
    pub patients: usize,
    pub providers: usize,
    pub claims_per_patient: usize,
    pub notes_per_claim: usize,
    /// "Today" for every sampling window. Unset means the current UTC date,
    /// which makes output depend on the day the run happens.
    pub reference_date: Option<NaiveDate>,
    /// Export destination for the command line
    pub output_dir: PathBuf,
    /// Generate claims with per-patient derived seeds on the rayon pool
    pub parallel: bool,
    pub logging: LoggerConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            patients: 1000,
            providers: 100,
            claims_per_patient: 3,
            notes_per_claim: 1,
            reference_date: None,
            output_dir: PathBuf::from("data/raw"),
            parallel: false,
            logging: LoggerConfig::default(),
        }
    }
}

impl GenerationConfig {
    /// Reference date, falling back to today's UTC date
    pub fn effective_reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}
