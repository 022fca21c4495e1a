//! Resolved path value objects

use std::fmt;
use std::path::{Path, PathBuf};

/// An absolute, canonical path that existed when it was resolved.
///
/// Existence is only guaranteed at resolution time; callers that act on the
/// path later must check again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    /// Wrap an already-canonicalized path.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// The final component, used as the name at the destination
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.0.file_name()
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// What kind of filesystem entry a path refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Whether copying this entry needs a recursive copy
    pub const fn is_recursive(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Whether a paste duplicates or relocates the source entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferKind {
    #[default]
    Copy,
    Move,
}

impl TransferKind {
    /// Past-tense verb used in confirmations
    pub const fn past_tense(&self) -> &'static str {
        match self {
            Self::Copy => "pasted",
            Self::Move => "moved",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Move => write!(f, "move"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_needs_recursion() {
        assert!(EntryKind::Directory.is_recursive());
        assert!(!EntryKind::File.is_recursive());
    }

    #[test]
    fn transfer_kind_wording() {
        assert_eq!(TransferKind::Copy.past_tense(), "pasted");
        assert_eq!(TransferKind::Move.past_tense(), "moved");
        assert_eq!(TransferKind::Move.to_string(), "move");
        assert_eq!(TransferKind::default(), TransferKind::Copy);
    }

    #[test]
    fn resolved_path_displays_inner_path() {
        let path = ResolvedPath::new(PathBuf::from("/tmp/project/report.txt"));
        assert_eq!(path.to_string(), "/tmp/project/report.txt");
        assert_eq!(path.file_name().unwrap(), "report.txt");
    }
}
