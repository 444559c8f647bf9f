mod decode;
mod render;
mod request;
mod types;

use crate::Cli;
use crate::CommandResult;
use crate::schemas;
use decode::DecodeCmd;
use render::RenderCmd;
use request::RequestCmd;
use types::TypesCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "nodeql")]
pub(crate) enum CommandEnum {
    Decode(Box<DecodeCmd>),
    Render(RenderCmd),
    Request(RequestCmd),
    Types(TypesCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Decode(cmd) => cmd.run(cli).await,
            Self::Render(cmd) => cmd.run(cli).await,
            Self::Request(cmd) => cmd.run(cli).await,
            Self::Types(cmd) => cmd.run(cli).await,
        }
    }
}

/// Restricts `--type` to the names in [`schemas::registry`].
pub(crate) fn type_name_parser() -> clap::builder::PossibleValuesParser {
    clap::builder::PossibleValuesParser::new(schemas::registry().keys().copied())
}

/// The node to look up: which bundled type, and its global id.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct NodeArgs {
    #[arg(
        help="The global node id to look up.",
        long,
    )]
    pub(crate) id: String,

    #[arg(
        help="The bundled GraphQL object type to select on the node.",
        long="type",
        value_parser=type_name_parser(),
    )]
    pub(crate) type_name: String,
}
