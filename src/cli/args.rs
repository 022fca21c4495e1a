//! CLI argument definitions using Clap

use clap::{ArgGroup, Parser};

/// fileclip - copy a file or directory path, then paste or move it elsewhere
#[derive(Parser, Debug)]
#[command(name = "fileclip")]
#[command(about = "Single-slot clipboard for file and directory paths")]
#[command(long_about = None)]
#[command(disable_version_flag = true)]
#[command(disable_help_flag = true)]
#[command(override_usage = "fileclip [-c [PATH]] [-p] [-m] [-d] [-r] [-v] [-h]")]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(false)
        .args(["copy", "paste", "relocate", "show", "clear", "version", "help"])
))]
pub struct Cli {
    /// Copy a file or directory path to the clipboard (default: current directory)
    #[arg(short = 'c', value_name = "PATH", num_args = 0..=1, allow_hyphen_values = true)]
    pub copy: Option<Option<String>>,

    /// Paste the copied file or directory into the current directory
    #[arg(short = 'p')]
    pub paste: bool,

    /// Move the copied file or directory into the current directory
    #[arg(short = 'm')]
    pub relocate: bool,

    /// Show clipboard contents
    #[arg(short = 'd')]
    pub show: bool,

    /// Clear the clipboard
    #[arg(short = 'r')]
    pub clear: bool,

    /// Show version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Show this help
    #[arg(short = 'h')]
    pub help: bool,
}

/// The single operation requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Store a path; `None` means the current directory
    Copy(Option<String>),
    Paste,
    Move,
    Show,
    Clear,
    Version,
    Help,
}

impl Cli {
    /// The requested action, if exactly one flag was given
    pub fn action(&self) -> Option<Action> {
        if let Some(arg) = &self.copy {
            return Some(Action::Copy(arg.clone()));
        }

        let flags = [
            (self.paste, Action::Paste),
            (self.relocate, Action::Move),
            (self.show, Action::Show),
            (self.clear, Action::Clear),
            (self.version, Action::Version),
            (self.help, Action::Help),
        ];
        flags
            .into_iter()
            .find_map(|(set, action)| set.then_some(action))
    }
}

/// Version line printed by `-v`
pub fn version_line() -> String {
    format!("fileclip version {}", env!("CARGO_PKG_VERSION"))
}
