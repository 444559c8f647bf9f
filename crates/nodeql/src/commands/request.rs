use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::NodeArgs;
use crate::output_utils;
use crate::schemas;

/// Prints the JSON body to POST to a GraphQL endpoint, e.g. with
/// `curl -d @- https://api.github.com/graphql`.
#[derive(Debug, clap::Args)]
pub(crate) struct RequestCmd {
    #[command(flatten)]
    node: NodeArgs,
}

#[inherent::inherent]
impl RunnableCommand for RequestCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let entry = match schemas::lookup(&self.node.type_name) {
            Ok(entry) => entry,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        match entry.request(&self.node.id).to_json() {
            Ok(body) => CommandResult::stdout(format_args!("{body}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize the request body: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
