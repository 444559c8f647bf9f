use std::process::ExitCode;

/// What a subcommand wants printed, and how the process should exit.
///
/// Decoded JSON goes to `stdout` only on success so that it can be piped
/// into other tools; every failure report goes to `stderr`.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub(crate) exit_code: ExitCode,
    pub(crate) stderr: Option<String>,
    pub(crate) stdout: Option<String>,
}
impl CommandResult {
    pub(crate) fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(fmt_args.to_string()),
            stdout: None,
        }
    }

    pub(crate) fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(fmt_args.to_string()),
        }
    }
}
