//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default clipboard tool preference
pub const DEFAULT_CLIPBOARD_TOOL: &str = "auto";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub clipboard_tool: Option<String>,
    pub log: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            clipboard_tool: Some(DEFAULT_CLIPBOARD_TOOL.to_string()),
            log: Some(DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            clipboard_tool: other.clipboard_tool.or(self.clipboard_tool),
            log: other.log.or(self.log),
        }
    }

    /// Get clipboard tool preference, or "auto" if not set
    pub fn clipboard_tool_or_default(&self) -> &str {
        self.clipboard_tool
            .as_deref()
            .unwrap_or(DEFAULT_CLIPBOARD_TOOL)
    }

    /// Get tracing filter, or "warn" if not set
    pub fn log_or_default(&self) -> &str {
        self.log.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.clipboard_tool, Some("auto".to_string()));
        assert_eq!(config.log, Some("warn".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.clipboard_tool.is_none());
        assert!(config.log.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig::defaults();
        let other = AppConfig {
            clipboard_tool: Some("xclip".to_string()),
            log: None,
        };

        let merged = base.merge(other);
        assert_eq!(merged.clipboard_tool, Some("xclip".to_string()));
        assert_eq!(merged.log, Some("warn".to_string()));
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.clipboard_tool_or_default(), "auto");
        assert_eq!(config.log_or_default(), "warn");
    }
}
