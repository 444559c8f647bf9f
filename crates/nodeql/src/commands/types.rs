use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::schemas;

#[derive(Debug, clap::Args)]
pub(crate) struct TypesCmd {
    #[arg(
        help="Only list the type names, without their fragments.",
        long,
    )]
    names_only: bool,
}

#[inherent::inherent]
impl RunnableCommand for TypesCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let registry = schemas::registry();
        log::debug!("Listing {} bundled types.", registry.len());

        let lines: Vec<String> =
            registry.iter()
                .map(|(name, entry)| {
                    if self.names_only {
                        name.to_string()
                    } else {
                        format!("{name}: {}", entry.fragment())
                    }
                })
                .collect();

        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}
