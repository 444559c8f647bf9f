mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;
mod schemas;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL");
    let (log_level, warning) = select_log_level(cli.verbose, env_val.as_deref().ok());

    // Decoded values go to stdout, so logs must not.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// `--verbose` wins over `LOG_LEVEL`; an unrecognized `LOG_LEVEL` falls back
/// to [`DEFAULT_LOG_LEVEL`] with a warning to report once logging is up.
fn select_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    match env_val.map(str::trim) {
        Some("DEBUG" | "debug") => (tracing::Level::DEBUG, None),
        Some("INFO" | "info") => (tracing::Level::INFO, None),
        Some("TRACE" | "trace") => (tracing::Level::TRACE, None),
        Some("VERBOSE" | "verbose") => (tracing::Level::DEBUG, None),
        Some("WARN" | "warn") => (tracing::Level::WARN, None),
        Some(other) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{other}`")),
        ),
        None => (DEFAULT_LOG_LEVEL, None),
    }
}
