//! Error types for Mission Control
//!
//! Uses `thiserror` for library errors. The derivation engine itself is
//! infallible; these only come out of loaders and lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mission Control operations
pub type MissionResult<T> = Result<T, MissionError>;

/// Main error type for Mission Control operations
#[derive(Error, Debug)]
pub enum MissionError {
    /// Sprint setting absent from both the snapshot and the config file
    #[error("missing required setting '{key}'")]
    MissingSetting { key: String },

    /// Sprint setting present but unusable
    #[error("invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },

    /// Founder lookup by id or name matched nobody
    #[error("no founder matches '{query}'")]
    FounderNotFound { query: String },

    /// Snapshot file is not valid JSON for the expected shape
    #[error("invalid snapshot {file}: {message}")]
    InvalidSnapshot { file: PathBuf, message: String },

    /// Config file is not valid TOML for the expected shape
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
