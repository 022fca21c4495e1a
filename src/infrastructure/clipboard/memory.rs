//! In-memory clipboard adapter

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Clipboard held in process memory.
///
/// Stands in for the system clipboard in tests and when driving the
/// engine from library code.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Mutex<String>,
}

impl MemoryClipboard {
    /// Create an empty in-memory clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard that already holds `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
        }
    }

    /// Current raw contents
    pub fn contents(&self) -> String {
        self.text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .text
            .lock()
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        *guard = text.to_string();
        Ok(())
    }

    async fn read(&self) -> Result<String, ClipboardError> {
        self.text
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))
    }
}
