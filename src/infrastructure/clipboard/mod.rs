//! Clipboard infrastructure module
//!
//! Provides system clipboard access through the platform's copy/paste
//! commands, with arboard as the cross-platform fallback.

mod arboard;
mod command;
mod factory;
mod memory;

pub use arboard::ArboardClipboard;
pub use command::{CommandClipboard, ToolCommand};
pub use factory::{
    create_clipboard, detect_clipboard_tool, ClipboardTool, ClipboardToolPreference,
    ParseClipboardToolError, VALID_CLIPBOARD_TOOLS,
};
pub use memory::MemoryClipboard;
