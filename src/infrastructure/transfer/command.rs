//! File transfer adapter using the platform `cp` and `mv` commands

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FileTransfer, TransferError};

/// Copies and moves entries by running `cp` / `mv`.
///
/// Paths are passed as separate arguments after `--`, so no shell ever
/// parses them and a leading dash is never read as an option.
#[derive(Debug, Clone)]
pub struct CommandTransfer {
    copy_program: String,
    move_program: String,
}

impl CommandTransfer {
    /// Create a transfer adapter using `cp` and `mv` from PATH
    pub fn new() -> Self {
        Self::with_programs("cp", "mv")
    }

    /// Create with custom programs
    pub fn with_programs(copy_program: impl Into<String>, move_program: impl Into<String>) -> Self {
        Self {
            copy_program: copy_program.into(),
            move_program: move_program.into(),
        }
    }

    async fn run(&self, program: &str, args: &[&OsStr]) -> Result<(), TransferError> {
        tracing::debug!(program, ?args, "running transfer command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TransferError::ToolNotFound {
                        tool: program.to_string(),
                    }
                } else {
                    TransferError::Failed {
                        tool: program.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(TransferError::Failed {
                tool: program.to_string(),
                message: if stderr.is_empty() {
                    format!("exited with status: {}", output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(())
    }
}

impl Default for CommandTransfer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileTransfer for CommandTransfer {
    async fn copy(
        &self,
        source: &Path,
        dest_dir: &Path,
        recursive: bool,
    ) -> Result<(), TransferError> {
        let mut args: Vec<&OsStr> = Vec::with_capacity(4);
        if recursive {
            args.push(OsStr::new("-R"));
        }
        args.push(OsStr::new("--"));
        args.push(source.as_os_str());
        args.push(dest_dir.as_os_str());

        self.run(&self.copy_program, &args).await
    }

    async fn relocate(&self, source: &Path, dest_dir: &Path) -> Result<(), TransferError> {
        let args = [OsStr::new("--"), source.as_os_str(), dest_dir.as_os_str()];
        self.run(&self.move_program, &args).await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn copies_single_file() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let file = src.path().join("report.txt");
        std::fs::write(&file, b"quarterly numbers").unwrap();

        CommandTransfer::new()
            .copy(&file, dest.path(), false)
            .await
            .unwrap();

        assert_eq!(
            std::fs::read(dest.path().join("report.txt")).unwrap(),
            b"quarterly numbers"
        );
        assert!(file.exists());
    }

    #[tokio::test]
    async fn copies_directory_recursively() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let project = src.path().join("project");
        std::fs::create_dir_all(project.join("src/nested")).unwrap();
        std::fs::write(project.join("src/nested/lib.rs"), "fn main() {}").unwrap();

        CommandTransfer::new()
            .copy(&project, dest.path(), true)
            .await
            .unwrap();

        let copied = dest.path().join("project/src/nested/lib.rs");
        assert_eq!(std::fs::read_to_string(copied).unwrap(), "fn main() {}");
    }

    #[tokio::test]
    async fn moves_entry() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let file = src.path().join("notes.md");
        std::fs::write(&file, "notes").unwrap();

        CommandTransfer::new()
            .relocate(&file, dest.path())
            .await
            .unwrap();

        assert!(!file.exists());
        assert!(dest.path().join("notes.md").exists());
    }

    #[tokio::test]
    async fn dash_prefixed_name_is_not_an_option() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let file = src.path().join("-rf");
        std::fs::write(&file, "x").unwrap();

        CommandTransfer::new()
            .copy(&file, dest.path(), false)
            .await
            .unwrap();

        assert!(dest.path().join("-rf").exists());
    }

    #[tokio::test]
    async fn directory_without_recursion_fails() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let dir = src.path().join("dir");
        std::fs::create_dir(&dir).unwrap();

        let err = CommandTransfer::new()
            .copy(&dir, dest.path(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::Failed { ref tool, .. } if tool == "cp"));
    }

    #[tokio::test]
    async fn missing_program_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = CommandTransfer::with_programs("fileclip-no-such-cp", "mv")
            .copy(dir.path(), dir.path(), true)
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::ToolNotFound { .. }));
    }
}
