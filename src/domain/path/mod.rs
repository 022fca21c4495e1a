//! Path domain module

mod resolved;
mod safety;

pub use resolved::{EntryKind, ResolvedPath, TransferKind};
pub use safety::{
    unsafe_reason, validate_untrusted, MAX_PATH_LEN, SHELL_METACHARACTERS, TRAVERSAL_MARKER,
};
