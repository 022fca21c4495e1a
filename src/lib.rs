//! fileclip - a single-slot clipboard for filesystem paths
//!
//! Copy a file or directory path in one shell, then paste (copy) or move
//! the entry into the current directory from any other shell.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (clipboard entry, resolved paths), path safety rules, errors
//! - **Application**: Path resolution and the clipboard transfer use case, plus port traits
//! - **Infrastructure**: Adapter implementations (clipboard tools, arboard, cp/mv, config file)
//! - **CLI**: Argument parsing, output formatting, and exit-code mapping

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
