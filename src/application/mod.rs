//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod engine;
pub mod ports;
pub mod resolve;

// Re-export use cases
pub use engine::{ClipboardTransferEngine, FileclipError};
pub use resolve::PathResolver;
