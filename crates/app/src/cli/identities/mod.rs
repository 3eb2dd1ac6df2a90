use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct IdentitiesCommand {
    #[command(subcommand)]
    command: IdentitiesSubcommand,
}

#[derive(Debug, Subcommand)]
enum IdentitiesSubcommand {
    /// Print every enrolled identity
    List(list::ListIdentitiesArgs),
}

pub(crate) async fn run(command: IdentitiesCommand) -> Result<(), String> {
    match command.command {
        IdentitiesSubcommand::List(args) => list::run(args).await,
    }
}
