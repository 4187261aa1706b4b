use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use serde::Serialize;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::GenerationConfig;

/// Default prefix for environment overrides, e.g. `CLAIMGEN_SEED=7`
pub const ENV_PREFIX: &str = "CLAIMGEN_";

/// Layered configuration loader.
///
/// Sources are merged in call order, later sources winning. The usual chain is
/// defaults → file → environment → command-line overrides.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    /// Start from [`GenerationConfig::default`]
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(GenerationConfig::default())),
        }
    }

    /// Merge a TOML or YAML file, chosen by extension (`.yaml`/`.yml` → YAML).
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        self.figment = if is_yaml {
            self.figment.merge(Yaml::file(path))
        } else {
            self.figment.merge(Toml::file(path))
        };
        Ok(self)
    }

    /// Merge `<prefix>*` environment variables; `__` separates nested keys
    /// (`CLAIMGEN_LOGGING__LEVEL=debug`).
    pub fn with_env(mut self, prefix: &str) -> Self {
        self.figment = self.figment.merge(Env::prefixed(prefix).split("__"));
        self
    }

    /// Merge explicit overrides. Fields serialized as absent leave earlier
    /// values in place, so `Option` fields with `skip_serializing_if` work.
    pub fn with_overrides<T: Serialize>(mut self, overrides: &T) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(overrides));
        self
    }

    /// Extract and validate the merged configuration
    pub fn load(self) -> Result<GenerationConfig> {
        let config: GenerationConfig = self.figment.extract()?;
        config.validate()?;
        tracing::debug!(
            seed = config.seed,
            patients = config.patients,
            providers = config.providers,
            "Generation configuration loaded"
        );
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
