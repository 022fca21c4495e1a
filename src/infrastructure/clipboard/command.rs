//! Clipboard adapter backed by external copy/paste commands

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

/// A program plus its fixed arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ToolCommand {
    const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    fn command(&self) -> Command {
        let mut command = Command::new(self.program);
        command.args(self.args);
        command
    }

    fn spawn_error(&self, e: std::io::Error) -> ClipboardError {
        if e.kind() == std::io::ErrorKind::NotFound {
            ClipboardError::ToolNotFound(self.program.to_string())
        } else {
            ClipboardError::ClipboardUnavailable(format!("{}: {}", self.program, e))
        }
    }
}

/// Clipboard adapter that pipes text through a write tool and a read tool.
///
/// Tools are spawned directly, never through a shell.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    write: ToolCommand,
    read: ToolCommand,
    clear: Option<ToolCommand>,
}

impl CommandClipboard {
    /// macOS `pbcopy` / `pbpaste`
    pub fn pbcopy() -> Self {
        Self {
            write: ToolCommand::new("pbcopy", &[]),
            read: ToolCommand::new("pbpaste", &[]),
            clear: None,
        }
    }

    /// Wayland `wl-copy` / `wl-paste`
    pub fn wl_clipboard() -> Self {
        Self {
            write: ToolCommand::new("wl-copy", &[]),
            read: ToolCommand::new("wl-paste", &["--no-newline"]),
            clear: Some(ToolCommand::new("wl-copy", &["--clear"])),
        }
    }

    /// X11 `xclip` on the CLIPBOARD selection
    pub fn xclip() -> Self {
        Self {
            write: ToolCommand::new("xclip", &["-selection", "clipboard", "-in"]),
            read: ToolCommand::new("xclip", &["-selection", "clipboard", "-out"]),
            clear: None,
        }
    }

    /// X11 `xsel` on the CLIPBOARD selection
    pub fn xsel() -> Self {
        Self {
            write: ToolCommand::new("xsel", &["--clipboard", "--input"]),
            read: ToolCommand::new("xsel", &["--clipboard", "--output"]),
            clear: Some(ToolCommand::new("xsel", &["--clipboard", "--delete"])),
        }
    }

    /// Name of the program used for writing
    pub fn write_program(&self) -> &'static str {
        self.write.program
    }

    /// Name of the program used for reading
    pub fn read_program(&self) -> &'static str {
        self.read.program
    }

    async fn run_silent(tool: ToolCommand) -> Result<(), ClipboardError> {
        let status = tool
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| tool.spawn_error(e))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "{} exited with status: {}",
                tool.program, status
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        // Selection owners like xclip fork and keep running, so their
        // stdout/stderr must not be pipes we wait on.
        let mut child = self
            .write
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.write.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "{} exited with status: {}",
                self.write.program, status
            )));
        }

        Ok(())
    }

    async fn read(&self) -> Result<String, ClipboardError> {
        let output = self
            .read
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| self.read.spawn_error(e))?;

        // wl-paste and xclip exit non-zero when nothing has been copied
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ClipboardError::ReadFailed(if stderr.is_empty() {
                format!("{} exited with status: {}", self.read.program, output.status)
            } else {
                stderr
            }));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| ClipboardError::ReadFailed("clipboard text is not UTF-8".to_string()))
    }

    async fn clear(&self) -> Result<(), ClipboardError> {
        match self.clear {
            Some(tool) => Self::run_silent(tool).await,
            None => self.write("").await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pbcopy_pairs_with_pbpaste() {
        let clipboard = CommandClipboard::pbcopy();
        assert_eq!(clipboard.write_program(), "pbcopy");
        assert_eq!(clipboard.read_program(), "pbpaste");
    }

    #[test]
    fn wayland_reads_without_newline() {
        let clipboard = CommandClipboard::wl_clipboard();
        assert_eq!(clipboard.read.args, &["--no-newline"]);
        assert!(clipboard.clear.is_some());
    }

    #[test]
    fn x11_tools_target_clipboard_selection() {
        assert!(CommandClipboard::xclip().read.args.contains(&"clipboard"));
        assert!(CommandClipboard::xsel().write.args.contains(&"--clipboard"));
    }

    #[tokio::test]
    async fn missing_tool_is_reported() {
        let clipboard = CommandClipboard {
            write: ToolCommand::new("fileclip-no-such-tool", &[]),
            read: ToolCommand::new("fileclip-no-such-tool", &[]),
            clear: None,
        };

        assert!(matches!(
            clipboard.write("x").await,
            Err(ClipboardError::ToolNotFound(_))
        ));
        assert!(matches!(
            clipboard.read().await,
            Err(ClipboardError::ToolNotFound(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn reads_tool_stdout() {
        let clipboard = CommandClipboard {
            write: ToolCommand::new("cat", &[]),
            read: ToolCommand::new("echo", &["/tmp/project"]),
            clear: None,
        };

        assert_eq!(clipboard.read().await.unwrap(), "/tmp/project\n");
        clipboard.write("ignored").await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_read_tool_is_read_failure() {
        let clipboard = CommandClipboard {
            write: ToolCommand::new("cat", &[]),
            read: ToolCommand::new("false", &[]),
            clear: None,
        };

        assert!(matches!(
            clipboard.read().await,
            Err(ClipboardError::ReadFailed(_))
        ));
    }
}
