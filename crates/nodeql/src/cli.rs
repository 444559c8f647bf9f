use clap::CommandFactory;
use crate::commands;

/// Render node-lookup queries for bundled GitHub types and decode the
/// responses they produce.
#[derive(clap::Parser, Debug)]
#[command(name = "nodeql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log the input paths scanned and each response decoded at \
             debug level. Overrides the `LOG_LEVEL` environment variable.",
        long,
        short='v',
    )]
    pub(crate) verbose: bool,
}
impl Cli {
    /// With no subcommand, list the subcommands instead of failing.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
