//! Configuration errors

use thiserror::Error;

/// Errors that can occur while loading or applying a logger configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Sink 'file' requires a path")]
    MissingPath,

    #[error("Unknown sink: {0}")]
    UnknownSink(String),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
