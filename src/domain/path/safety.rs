//! Validation of path text that came from outside the process

use crate::domain::error::PathError;

/// Directory-traversal marker rejected in untrusted input
pub const TRAVERSAL_MARKER: &str = "..";

/// Shell metacharacters rejected in untrusted input
pub const SHELL_METACHARACTERS: &[char] = &['&', ';', '|', '`', '$', '>', '<'];

/// Longest joined path accepted when resolving a relative argument
#[cfg(target_os = "macos")]
pub const MAX_PATH_LEN: usize = 1024;

#[cfg(not(target_os = "macos"))]
pub const MAX_PATH_LEN: usize = 4096;

/// Returns the first reason `input` is unsafe, if any.
///
/// Rejects traversal segments, shell metacharacters, and control characters
/// (NUL, newlines, tabs). Paths are handed to child processes as discrete
/// arguments, so this is a second line of defense rather than the only one.
pub fn unsafe_reason(input: &str) -> Option<&'static str> {
    if input.contains(TRAVERSAL_MARKER) {
        return Some("directory traversal");
    }
    if input.contains(SHELL_METACHARACTERS) {
        return Some("shell metacharacter");
    }
    if input.chars().any(char::is_control) {
        return Some("control character");
    }
    None
}

/// Check that `input` is safe to use as a path.
pub fn validate_untrusted(input: &str) -> Result<(), PathError> {
    match unsafe_reason(input) {
        Some(reason) => {
            tracing::debug!(input, reason, "rejected untrusted path");
            Err(PathError::Unsafe {
                input: input.to_string(),
            })
        }
        None => Ok(()),
    }
}
