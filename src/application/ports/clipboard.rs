//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("clipboard tool not found: {0}")]
    ToolNotFound(String),

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("failed to write clipboard: {0}")]
    WriteFailed(String),

    #[error("failed to read clipboard: {0}")]
    ReadFailed(String),
}

/// Port for system clipboard text storage
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Arguments
    /// * `text` - The text to store, written verbatim
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;

    /// Read the current clipboard text.
    ///
    /// # Returns
    /// The raw text, or an empty string when the clipboard holds no text
    async fn read(&self) -> Result<String, ClipboardError>;

    /// Clear the clipboard by storing an empty string.
    async fn clear(&self) -> Result<(), ClipboardError> {
        self.write("").await
    }
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write(text).await
    }

    async fn read(&self) -> Result<String, ClipboardError> {
        self.as_ref().read().await
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        self.as_ref().clear().await
    }
}
