use error_common::{codes, SynthError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Configuration parsing failed: {0}")]
    ParseError(#[from] Box<figment::Error>),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError(Box::new(error))
    }
}

impl From<ConfigError> for SynthError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::FileNotFound(_) | ConfigError::ParseError(_) => {
                codes::configuration::SOURCE_UNREADABLE
            }
            ConfigError::ValidationError(_) => codes::configuration::DEGENERATE_PARAMETER,
        };
        SynthError::configuration_with_code(code, error.to_string())
    }
}
