//! Main app runner: dispatches an action and maps its outcome to an exit code

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::CommandFactory;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::application::ports::{Clipboard, ClipboardError, ConfigStore};
use crate::application::{ClipboardTransferEngine, FileclipError, PathResolver};
use crate::domain::clipboard::ClipboardEntry;
use crate::domain::config::{AppConfig, DEFAULT_LOG_FILTER};
use crate::domain::error::PathError;
use crate::domain::path::TransferKind;
use crate::infrastructure::clipboard::ParseClipboardToolError;
use crate::infrastructure::{
    create_clipboard, ClipboardToolPreference, CommandTransfer, XdgConfigStore,
};

use super::args::{version_line, Action, Cli};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE_ERROR: u8 = 1;
pub const EXIT_ENVIRONMENT_ERROR: u8 = 2;
pub const EXIT_TRANSFER_ERROR: u8 = 3;

/// Environment variable overriding the clipboard tool
pub const ENV_CLIPBOARD_TOOL: &str = "FILECLIP_CLIPBOARD_TOOL";

/// Environment variable overriding the tracing filter
pub const ENV_LOG: &str = "FILECLIP_LOG";

/// Exit code for a failed operation
pub fn exit_code_for(err: &FileclipError) -> u8 {
    match err {
        FileclipError::EmptyClipboard => EXIT_USAGE_ERROR,
        FileclipError::Transfer(_) => EXIT_TRANSFER_ERROR,
        FileclipError::Path(_) | FileclipError::Clipboard(_) => EXIT_ENVIRONMENT_ERROR,
    }
}

/// Report a command-line parse failure. Every parse failure is a usage error.
pub fn handle_parse_error(err: clap::Error, presenter: &Presenter) -> ExitCode {
    match usage_diagnostic(&err) {
        UsageDiagnostic::UnknownFlag(detail) => {
            presenter.error(&format!("unknown argument: {}", detail));
        }
        UsageDiagnostic::Usage(message) => {
            presenter.error(&message);
            print_help(presenter);
        }
    }
    ExitCode::from(EXIT_USAGE_ERROR)
}

/// How a usage error is reported
#[derive(Debug, PartialEq, Eq)]
enum UsageDiagnostic {
    /// An unrecognized flag; reported without the help text
    UnknownFlag(String),
    /// Anything else; followed by the help text
    Usage(String),
}

fn usage_diagnostic(err: &clap::Error) -> UsageDiagnostic {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => UsageDiagnostic::Usage("no action given".to_string()),
        ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) if arg.starts_with('-') => {
                UsageDiagnostic::UnknownFlag(arg.clone())
            }
            Some(ContextValue::String(arg)) => {
                UsageDiagnostic::Usage(format!("invalid usage: unexpected argument '{}'", arg))
            }
            _ => UsageDiagnostic::Usage(format!("invalid usage: {}", first_line(err))),
        },
        _ => UsageDiagnostic::Usage(format!("invalid arguments: {}", first_line(err))),
    }
}

/// clap's headline without its `error: ` prefix
fn first_line(err: &clap::Error) -> String {
    err.to_string()
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}

fn print_help(presenter: &Presenter) {
    presenter.output(&Cli::command().render_help().to_string());
}

/// Install the stderr tracing subscriber
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Load and merge configuration from file and env
pub async fn load_merged_config(presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("{} ({}), using defaults", e, store.path().display()));
            AppConfig::empty()
        }
    };

    // Build env config
    let env_config = AppConfig {
        clipboard_tool: env::var(ENV_CLIPBOARD_TOOL).ok().filter(|s| !s.is_empty()),
        log: env::var(ENV_LOG).ok().filter(|s| !s.is_empty()),
    };

    // Merge: defaults < file < env
    AppConfig::defaults().merge(file_config).merge(env_config)
}

/// Run a parsed action
pub async fn run(action: Action, config: &AppConfig, presenter: &Presenter) -> ExitCode {
    match execute(action, config, presenter).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(RunError::Operation(e)) => {
            presenter.error(&e.to_string());
            ExitCode::from(exit_code_for(&e))
        }
        Err(RunError::Environment(message)) => {
            presenter.error(&message);
            ExitCode::from(EXIT_ENVIRONMENT_ERROR)
        }
    }
}

/// Failures that end the invocation
enum RunError {
    Operation(FileclipError),
    Environment(String),
}

impl From<FileclipError> for RunError {
    fn from(e: FileclipError) -> Self {
        Self::Operation(e)
    }
}

impl From<PathError> for RunError {
    fn from(e: PathError) -> Self {
        Self::Operation(e.into())
    }
}

impl From<ClipboardError> for RunError {
    fn from(e: ClipboardError) -> Self {
        Self::Operation(e.into())
    }
}

async fn execute(action: Action, config: &AppConfig, presenter: &Presenter) -> Result<(), RunError> {
    match action {
        Action::Version => {
            presenter.output(&version_line());
        }
        Action::Help => print_help(presenter),
        Action::Copy(arg) => {
            let cwd = current_dir()?;
            // Resolve before touching the clipboard so a bad path leaves it untouched
            let resolved = PathResolver::new().resolve(arg.as_deref(), &cwd).await?;
            let engine = build_engine(config).await?;
            engine.store(&resolved).await?;
            presenter.confirm("copied", &resolved.to_string());
        }
        Action::Paste => paste(TransferKind::Copy, config, presenter).await?,
        Action::Move => paste(TransferKind::Move, config, presenter).await?,
        Action::Show => {
            let engine = build_engine(config).await?;
            match engine.show().await? {
                ClipboardEntry::Holding(text) => presenter.message(&text),
                ClipboardEntry::Empty => presenter.notice("clipboard is empty"),
            }
        }
        Action::Clear => {
            let engine = build_engine(config).await?;
            engine.clear().await?;
            presenter.message("clipboard cleared");
        }
    }

    Ok(())
}

async fn paste(kind: TransferKind, config: &AppConfig, presenter: &Presenter) -> Result<(), RunError> {
    let cwd = current_dir()?;
    let engine = build_engine(config).await?;
    let source = engine.paste(kind, &cwd).await?;
    presenter.confirm(kind.past_tense(), &source.display().to_string());
    Ok(())
}

fn current_dir() -> Result<PathBuf, RunError> {
    env::current_dir()
        .map_err(|e| RunError::Environment(format!("cannot determine current directory: {}", e)))
}

type SystemEngine = ClipboardTransferEngine<Box<dyn Clipboard>, CommandTransfer>;

async fn build_engine(config: &AppConfig) -> Result<SystemEngine, RunError> {
    let preference: ClipboardToolPreference = config
        .clipboard_tool_or_default()
        .parse()
        .map_err(|e: ParseClipboardToolError| RunError::Environment(e.to_string()))?;

    let (clipboard, _tool) = create_clipboard(preference).await?;
    Ok(ClipboardTransferEngine::new(clipboard, CommandTransfer::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::TransferError;
    use clap::Parser;

    fn diagnostic_for(args: &[&str]) -> UsageDiagnostic {
        let err = Cli::try_parse_from(std::iter::once("fileclip").chain(args.iter().copied()))
            .unwrap_err();
        usage_diagnostic(&err)
    }

    #[test]
    fn missing_action_names_the_condition() {
        assert_eq!(
            diagnostic_for(&[]),
            UsageDiagnostic::Usage("no action given".to_string())
        );
    }

    #[test]
    fn unknown_flag_is_reported_alone() {
        assert_eq!(
            diagnostic_for(&["-x"]),
            UsageDiagnostic::UnknownFlag("-x".to_string())
        );
        assert_eq!(
            diagnostic_for(&["--help"]),
            UsageDiagnostic::UnknownFlag("--help".to_string())
        );
    }

    #[test]
    fn stray_argument_is_invalid_usage() {
        match diagnostic_for(&["-p", "foo"]) {
            UsageDiagnostic::Usage(message) => {
                assert!(message.starts_with("invalid usage"));
                assert!(message.contains("foo"));
            }
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn conflicting_actions_are_invalid_arguments() {
        match diagnostic_for(&["-p", "-d"]) {
            UsageDiagnostic::Usage(message) => assert!(message.starts_with("invalid arguments")),
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn empty_clipboard_is_a_usage_error() {
        assert_eq!(exit_code_for(&FileclipError::EmptyClipboard), EXIT_USAGE_ERROR);
    }

    #[test]
    fn path_problems_are_environment_errors() {
        let unsafe_path = FileclipError::Path(PathError::Unsafe {
            input: "a;b".to_string(),
        });
        let missing = FileclipError::Path(PathError::NotFound {
            path: PathBuf::from("/nope"),
        });
        assert_eq!(exit_code_for(&unsafe_path), EXIT_ENVIRONMENT_ERROR);
        assert_eq!(exit_code_for(&missing), EXIT_ENVIRONMENT_ERROR);
    }

    #[test]
    fn clipboard_service_failure_is_environment_error() {
        let err = FileclipError::Clipboard(ClipboardError::ToolNotFound("pbcopy".to_string()));
        assert_eq!(exit_code_for(&err), EXIT_ENVIRONMENT_ERROR);
    }

    #[test]
    fn transfer_failure_has_its_own_code() {
        let err = FileclipError::Transfer(TransferError::Failed {
            tool: "cp".to_string(),
            message: "Permission denied".to_string(),
        });
        assert_eq!(exit_code_for(&err), EXIT_TRANSFER_ERROR);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            EXIT_SUCCESS,
            EXIT_USAGE_ERROR,
            EXIT_ENVIRONMENT_ERROR,
            EXIT_TRANSFER_ERROR,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
