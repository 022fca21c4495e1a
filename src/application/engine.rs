//! Clipboard transfer use case

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use crate::domain::clipboard::ClipboardEntry;
use crate::domain::error::PathError;
use crate::domain::path::{validate_untrusted, EntryKind, ResolvedPath, TransferKind};

use super::ports::{Clipboard, ClipboardError, FileTransfer, TransferError};
use super::resolve::exists;

/// Errors from clipboard and transfer operations
#[derive(Debug, Error)]
pub enum FileclipError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("clipboard is empty or unreadable")]
    EmptyClipboard,

    #[error("paste failed: {0}")]
    Transfer(#[from] TransferError),
}

/// Stores paths on the clipboard and materializes them into a directory
pub struct ClipboardTransferEngine<C, T>
where
    C: Clipboard,
    T: FileTransfer,
{
    clipboard: C,
    transfer: T,
}

impl<C, T> ClipboardTransferEngine<C, T>
where
    C: Clipboard,
    T: FileTransfer,
{
    /// Create a new engine instance
    pub fn new(clipboard: C, transfer: T) -> Self {
        Self {
            clipboard,
            transfer,
        }
    }

    /// Access the underlying clipboard
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Store `path` on the clipboard, replacing whatever was there.
    ///
    /// Clipboard text is UTF-8, so a path that is not is refused rather than
    /// stored in a lossy form that would no longer name the same entry.
    pub async fn store(&self, path: &ResolvedPath) -> Result<(), FileclipError> {
        let text = path.as_path().to_str().ok_or_else(|| PathError::NotUtf8 {
            path: path.as_path().to_path_buf(),
        })?;
        self.clipboard.write(text).await?;
        tracing::info!(path = %text, "stored path on clipboard");
        Ok(())
    }

    /// Read the clipboard and validate it as a path to act on.
    ///
    /// The clipboard is shared with every other program on the system, so
    /// its contents are treated as untrusted input.
    pub async fn retrieve(&self) -> Result<PathBuf, FileclipError> {
        let raw = match self.clipboard.read().await {
            Ok(raw) => raw,
            Err(ClipboardError::ReadFailed(reason)) => {
                tracing::debug!(%reason, "clipboard read failed");
                return Err(FileclipError::EmptyClipboard);
            }
            Err(e) => return Err(e.into()),
        };

        let text = match ClipboardEntry::from_raw(&raw) {
            ClipboardEntry::Empty => return Err(FileclipError::EmptyClipboard),
            ClipboardEntry::Holding(text) => text,
        };

        validate_untrusted(&text)?;

        let path = PathBuf::from(&text);
        if !path.is_absolute() {
            return Err(PathError::Unsafe { input: text }.into());
        }

        Ok(path)
    }

    /// Report whether `path` is a directory or a plain file
    pub async fn classify(&self, path: &Path) -> Result<EntryKind, PathError> {
        let metadata = fs::metadata(path).await.map_err(|source| PathError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    /// Copy or move `source` into `dest_dir`.
    ///
    /// Existence is checked again here because the entry may have vanished
    /// since it was stored.
    pub async fn transfer(
        &self,
        source: &Path,
        kind: TransferKind,
        dest_dir: &Path,
    ) -> Result<(), FileclipError> {
        if !exists(source).await {
            return Err(PathError::NoLongerExists {
                path: source.to_path_buf(),
            }
            .into());
        }

        match kind {
            TransferKind::Copy => {
                let entry = self.classify(source).await?;
                tracing::debug!(?entry, source = %source.display(), "copying entry");
                self.transfer
                    .copy(source, dest_dir, entry.is_recursive())
                    .await?;
            }
            TransferKind::Move => {
                tracing::debug!(source = %source.display(), "moving entry");
                self.transfer.relocate(source, dest_dir).await?;
            }
        }

        Ok(())
    }

    /// Retrieve the stored path and materialize it into `dest_dir`
    pub async fn paste(&self, kind: TransferKind, dest_dir: &Path) -> Result<PathBuf, FileclipError> {
        let source = self.retrieve().await?;
        self.transfer(&source, kind, dest_dir).await?;
        tracing::info!(%kind, source = %source.display(), dest = %dest_dir.display(), "transfer complete");
        Ok(source)
    }

    /// Empty the clipboard
    pub async fn clear(&self) -> Result<(), FileclipError> {
        self.clipboard.clear().await?;
        Ok(())
    }

    /// Read the clipboard for display only.
    ///
    /// No validation is applied; the result never drives a filesystem
    /// operation. An unreadable clipboard shows as empty.
    pub async fn show(&self) -> Result<ClipboardEntry, FileclipError> {
        match self.clipboard.read().await {
            Ok(raw) => Ok(ClipboardEntry::from_raw(&raw)),
            Err(ClipboardError::ReadFailed(_)) => Ok(ClipboardEntry::Empty),
            Err(e) => Err(e.into()),
        }
    }
}
