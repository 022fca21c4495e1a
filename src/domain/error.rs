//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving or validating a filesystem path
#[derive(Debug, Error)]
pub enum PathError {
    #[error("invalid or unsafe path: {input}")]
    Unsafe { input: String },

    #[error("file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("copied path no longer exists: {}", .path.display())]
    NoLongerExists { path: PathBuf },

    #[error("path is not valid UTF-8: {}", .path.display())]
    NotUtf8 { path: PathBuf },

    #[error("path exceeds {limit} bytes: {}", .path.display())]
    TooLong { path: PathBuf, limit: usize },

    #[error("cannot resolve {}: {source}", .path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot inspect {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}
