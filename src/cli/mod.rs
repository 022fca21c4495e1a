//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting,
//! and the top-level runner that owns exit codes.

pub mod app;
pub mod args;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    exit_code_for, handle_parse_error, init_tracing, load_merged_config, run,
    EXIT_ENVIRONMENT_ERROR, EXIT_SUCCESS, EXIT_TRANSFER_ERROR, EXIT_USAGE_ERROR,
};
pub use args::{Action, Cli};
pub use presenter::Presenter;
