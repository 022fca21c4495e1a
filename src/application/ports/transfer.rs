//! File transfer port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// File transfer errors
#[derive(Debug, Clone, Error)]
pub enum TransferError {
    #[error("{tool} not found")]
    ToolNotFound { tool: String },

    #[error("{tool} failed: {message}")]
    Failed { tool: String, message: String },
}

/// Port for the copy/move primitive
#[async_trait]
pub trait FileTransfer: Send + Sync {
    /// Duplicate `source` into `dest_dir`, keeping its name.
    ///
    /// Directories are copied with their structure when `recursive` is set.
    async fn copy(&self, source: &Path, dest_dir: &Path, recursive: bool)
        -> Result<(), TransferError>;

    /// Relocate `source` into `dest_dir`, keeping its name.
    async fn relocate(&self, source: &Path, dest_dir: &Path) -> Result<(), TransferError>;
}
