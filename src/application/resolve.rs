//! Resolve user-supplied path arguments

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::error::PathError;
use crate::domain::path::{validate_untrusted, ResolvedPath, MAX_PATH_LEN};

/// Turns a copy argument (or its absence) into an absolute, canonical path
#[derive(Debug, Clone, Copy)]
pub struct PathResolver {
    max_len: usize,
}

impl PathResolver {
    /// Create a resolver using the platform path-length limit
    pub fn new() -> Self {
        Self {
            max_len: MAX_PATH_LEN,
        }
    }

    /// Create a resolver with a custom path-length limit
    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Resolve `arg` against `cwd`.
    ///
    /// With no argument the working directory itself is resolved. Arguments
    /// are checked for traversal and shell metacharacters before anything
    /// touches the filesystem.
    pub async fn resolve(&self, arg: Option<&str>, cwd: &Path) -> Result<ResolvedPath, PathError> {
        let candidate = match arg {
            None => cwd.to_path_buf(),
            Some(arg) => {
                validate_untrusted(arg)?;
                self.join(arg, cwd)?
            }
        };

        if !exists(&candidate).await {
            return Err(PathError::NotFound { path: candidate });
        }

        let canonical = fs::canonicalize(&candidate)
            .await
            .map_err(|source| PathError::Canonicalize {
                path: candidate.clone(),
                source,
            })?;

        tracing::debug!(path = %canonical.display(), "resolved path");
        Ok(ResolvedPath::new(canonical))
    }

    fn join(&self, arg: &str, cwd: &Path) -> Result<PathBuf, PathError> {
        let arg_path = Path::new(arg);
        let joined = if arg_path.is_absolute() {
            arg_path.to_path_buf()
        } else {
            cwd.join(arg_path)
        };

        // Leave room for the terminating NUL the OS expects
        if joined.as_os_str().len() >= self.max_len {
            return Err(PathError::TooLong {
                path: joined,
                limit: self.max_len,
            });
        }

        Ok(joined)
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Existence check that follows symlinks, so a dangling link counts as missing
pub(crate) async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
