//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod path;

// Re-export common types
pub use clipboard::ClipboardEntry;
pub use config::AppConfig;
pub use error::*;
pub use path::{EntryKind, ResolvedPath, TransferKind};
