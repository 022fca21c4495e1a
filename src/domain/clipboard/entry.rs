//! Clipboard entry value object

use std::fmt;

/// The single slot held by the system clipboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClipboardEntry {
    #[default]
    Empty,
    Holding(String),
}

impl ClipboardEntry {
    /// Build an entry from raw clipboard text.
    ///
    /// Exactly one trailing line ending (`\n` or `\r\n`) is stripped. Text that
    /// is empty afterwards is treated as an empty clipboard.
    pub fn from_raw(raw: &str) -> Self {
        let text = raw
            .strip_suffix("\r\n")
            .or_else(|| raw.strip_suffix('\n'))
            .unwrap_or(raw);

        if text.is_empty() {
            Self::Empty
        } else {
            Self::Holding(text.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Holding(text) => Some(text),
        }
    }
}

impl fmt::Display for ClipboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            Self::Holding(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_exactly_one_newline() {
        assert_eq!(
            ClipboardEntry::from_raw("/tmp/a\n"),
            ClipboardEntry::Holding("/tmp/a".to_string())
        );
        assert_eq!(
            ClipboardEntry::from_raw("/tmp/a\n\n"),
            ClipboardEntry::Holding("/tmp/a\n".to_string())
        );
        assert_eq!(
            ClipboardEntry::from_raw("/tmp/a\r\n"),
            ClipboardEntry::Holding("/tmp/a".to_string())
        );
    }

    #[test]
    fn keeps_text_without_newline() {
        let entry = ClipboardEntry::from_raw("/tmp/a");
        assert_eq!(entry.as_str(), Some("/tmp/a"));
        assert!(!entry.is_empty());
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(ClipboardEntry::from_raw("").is_empty());
        assert!(ClipboardEntry::from_raw("\n").is_empty());
        assert_eq!(ClipboardEntry::default(), ClipboardEntry::Empty);
    }
}
