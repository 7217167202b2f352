use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SfxPrepError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output directory creation failed at {path}: {reason}")]
    OutputDirectoryCreation { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {details}")]
    ConfigValidation { details: String },

    #[error("Invalid asset {asset}: {details}")]
    AssetValidation { asset: String, details: String },

    #[error("CLI argument validation failed: {details}")]
    CliArgumentValidation { details: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
