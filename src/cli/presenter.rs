//! CLI presenter for output formatting

use colored::*;

/// Prefix carried by every line fileclip prints about itself
pub const TOOL_PREFIX: &str = "fileclip";

const DIAGNOSTIC_PREFIX: &str = "fileclip:";

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Format a confirmation line such as `fileclip copied: /path`
    pub fn format_confirmation(&self, verb: &str, subject: &str) -> String {
        format!("{} {}: {}", TOOL_PREFIX, verb, subject)
    }

    /// Format a tool message such as `fileclip: clipboard cleared`
    pub fn format_message(&self, message: &str) -> String {
        format!("{}: {}", TOOL_PREFIX, message)
    }

    /// Print a confirmation to stdout
    pub fn confirm(&self, verb: &str, subject: &str) {
        println!("{}", self.format_confirmation(verb, subject));
    }

    /// Print a tool message to stdout
    pub fn message(&self, message: &str) {
        println!("{}", self.format_message(message));
    }

    /// Print informational notice to stderr
    pub fn notice(&self, message: &str) {
        eprintln!("{} {}", DIAGNOSTIC_PREFIX.cyan(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!(
            "{} {} {}",
            DIAGNOSTIC_PREFIX.yellow(),
            "warning:".yellow(),
            message
        );
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", DIAGNOSTIC_PREFIX.red().bold(), message);
    }

    /// Output text to stdout verbatim
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_names_the_tool() {
        let presenter = Presenter::new();
        assert_eq!(
            presenter.format_confirmation("copied", "/tmp/project"),
            "fileclip copied: /tmp/project"
        );
    }

    #[test]
    fn message_is_prefixed() {
        let presenter = Presenter::new();
        assert_eq!(
            presenter.format_message("clipboard cleared"),
            "fileclip: clipboard cleared"
        );
    }
}
