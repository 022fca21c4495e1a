//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, the filesystem tools,
//! and the config file.

pub mod clipboard;
pub mod config;
pub mod transfer;

// Re-export adapters
pub use clipboard::{
    create_clipboard, ArboardClipboard, ClipboardTool, ClipboardToolPreference, CommandClipboard,
    MemoryClipboard,
};
pub use config::XdgConfigStore;
pub use transfer::CommandTransfer;
