//! Clipboard domain module

mod entry;

pub use entry::ClipboardEntry;
