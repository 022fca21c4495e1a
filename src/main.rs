//! fileclip CLI entry point

use std::process::ExitCode;

use clap::Parser;

use fileclip::cli::{
    handle_parse_error, init_tracing, load_merged_config, run, Cli, Presenter, EXIT_USAGE_ERROR,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let presenter = Presenter::new();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e, &presenter),
    };

    let Some(action) = cli.action() else {
        presenter.error("invalid arguments");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let config = load_merged_config(&presenter).await;
    init_tracing(config.log_or_default());

    run(action, &config, &presenter).await
}
