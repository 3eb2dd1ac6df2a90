use clap::{Args, Subcommand};

mod list;

#[derive(Debug, Args)]
pub(crate) struct VisitsCommand {
    #[command(subcommand)]
    command: VisitsSubcommand,
}

#[derive(Debug, Subcommand)]
enum VisitsSubcommand {
    /// Print the visitor ledger, newest first
    List(list::ListVisitsArgs),
}

pub(crate) async fn run(command: VisitsCommand) -> Result<(), String> {
    match command.command {
        VisitsSubcommand::List(args) => list::run(args).await,
    }
}
