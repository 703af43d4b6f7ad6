use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a navigation config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file parsed as neither valid TOML nor the expected shape.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON config that failed to parse.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Extension is neither `.toml` nor `.json`.
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
