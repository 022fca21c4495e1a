//! Clipboard backend selection with automatic detection

use std::fmt;
use std::str::FromStr;

#[cfg(all(unix, not(target_os = "macos")))]
use std::env;
#[cfg(unix)]
use std::process::Stdio;

#[cfg(unix)]
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

use super::arboard::ArboardClipboard;
use super::command::CommandClipboard;

/// Available clipboard backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    /// macOS pbcopy/pbpaste
    Pbcopy,
    /// Wayland wl-copy/wl-paste
    WlClipboard,
    /// X11 xclip
    Xclip,
    /// X11 xsel
    Xsel,
    /// Cross-platform arboard library
    Arboard,
}

impl ClipboardTool {
    /// Binary that must be on PATH for this backend, if any
    pub const fn binary(&self) -> Option<&'static str> {
        match self {
            Self::Pbcopy => Some("pbcopy"),
            Self::WlClipboard => Some("wl-copy"),
            Self::Xclip => Some("xclip"),
            Self::Xsel => Some("xsel"),
            Self::Arboard => None,
        }
    }

    fn build(self) -> Box<dyn Clipboard> {
        match self {
            Self::Pbcopy => Box::new(CommandClipboard::pbcopy()),
            Self::WlClipboard => Box::new(CommandClipboard::wl_clipboard()),
            Self::Xclip => Box::new(CommandClipboard::xclip()),
            Self::Xsel => Box::new(CommandClipboard::xsel()),
            Self::Arboard => Box::new(ArboardClipboard::new()),
        }
    }
}

impl fmt::Display for ClipboardTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pbcopy => write!(f, "pbcopy"),
            Self::WlClipboard => write!(f, "wl-clipboard"),
            Self::Xclip => write!(f, "xclip"),
            Self::Xsel => write!(f, "xsel"),
            Self::Arboard => write!(f, "arboard"),
        }
    }
}

/// User preference for clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardToolPreference {
    /// Detect the best backend for this session
    #[default]
    Auto,
    /// Always use a specific backend
    Tool(ClipboardTool),
}

impl fmt::Display for ClipboardToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tool(tool) => write!(f, "{}", tool),
        }
    }
}

/// Valid clipboard tool preference values
pub const VALID_CLIPBOARD_TOOLS: &str = "auto, pbcopy, wl-clipboard, xclip, xsel, arboard";

/// Error type for parsing clipboard tool preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClipboardToolError {
    pub value: String,
}

impl fmt::Display for ParseClipboardToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid clipboard tool '{}'. Valid options: {}",
            self.value, VALID_CLIPBOARD_TOOLS
        )
    }
}

impl std::error::Error for ParseClipboardToolError {}

impl FromStr for ClipboardToolPreference {
    type Err = ParseClipboardToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "pbcopy" => Ok(Self::Tool(ClipboardTool::Pbcopy)),
            "wl-clipboard" | "wl-copy" => Ok(Self::Tool(ClipboardTool::WlClipboard)),
            "xclip" => Ok(Self::Tool(ClipboardTool::Xclip)),
            "xsel" => Ok(Self::Tool(ClipboardTool::Xsel)),
            "arboard" => Ok(Self::Tool(ClipboardTool::Arboard)),
            _ => Err(ParseClipboardToolError {
                value: s.to_string(),
            }),
        }
    }
}

/// Check if a tool binary is available using `which`
#[cfg(unix)]
async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(not(unix))]
async fn is_tool_available(_tool: &str) -> bool {
    false
}

/// Tools searched for by auto-detection on Linux and the BSDs
#[cfg(all(unix, not(target_os = "macos")))]
const SELECTION_TOOLS: &str = "wl-copy, xclip or xsel";

/// Detect the best available clipboard backend
///
/// On macOS: pbcopy
/// On other Unix: wl-clipboard (Wayland session) → xclip → xsel
/// Elsewhere: arboard
///
/// On other Unix an in-process selection dies with fileclip, so arboard is
/// never picked automatically; finding none of the tools is an error.
pub async fn detect_clipboard_tool() -> Result<ClipboardTool, ClipboardError> {
    #[cfg(target_os = "macos")]
    {
        return Ok(ClipboardTool::Pbcopy);
    }

    #[cfg(not(unix))]
    {
        return Ok(ClipboardTool::Arboard);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        let wayland = env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty());
        if wayland && is_tool_available("wl-copy").await {
            return Ok(ClipboardTool::WlClipboard);
        }

        if is_tool_available("xclip").await {
            return Ok(ClipboardTool::Xclip);
        }

        if is_tool_available("xsel").await {
            return Ok(ClipboardTool::Xsel);
        }

        Err(ClipboardError::ToolNotFound(SELECTION_TOOLS.to_string()))
    }
}

/// Create a clipboard adapter using the specified preference.
///
/// Returns the adapter and the selected tool, or an error if the requested
/// tool is not installed or auto-detection finds none.
pub async fn create_clipboard(
    preference: ClipboardToolPreference,
) -> Result<(Box<dyn Clipboard>, ClipboardTool), ClipboardError> {
    let tool = match preference {
        ClipboardToolPreference::Auto => detect_clipboard_tool().await?,
        ClipboardToolPreference::Tool(tool) => {
            if let Some(binary) = tool.binary() {
                if !is_tool_available(binary).await {
                    return Err(ClipboardError::ToolNotFound(binary.to_string()));
                }
            }
            tool
        }
    };

    tracing::debug!(%tool, %preference, "selected clipboard backend");
    Ok((tool.build(), tool))
}
