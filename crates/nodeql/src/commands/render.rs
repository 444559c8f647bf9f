use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::NodeArgs;
use crate::output_utils;
use crate::schemas;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[command(flatten)]
    node: NodeArgs,
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let entry = match schemas::lookup(&self.node.type_name) {
            Ok(entry) => entry,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        log::debug!("Rendering a `{}` lookup of `{}`.", self.node.type_name, self.node.id);
        let request = entry.request(&self.node.id);
        CommandResult::stdout(format_args!("{}", request.query()))
    }
}
