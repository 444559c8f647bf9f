use crate::Cli;
use crate::CommandResult;

/// A `nodeql` subcommand. Each one reports back through a [`CommandResult`]
/// instead of printing, so `main` owns stdout, stderr and the exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
