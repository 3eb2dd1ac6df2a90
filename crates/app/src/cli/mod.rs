use clap::{Parser, Subcommand};
use facegate_app::database;
use sqlx::PgPool;

mod identities;
mod migrate;
mod visits;

#[derive(Debug, Parser)]
#[command(name = "facegate-app", about = "Facegate CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),
    Identities(identities::IdentitiesCommand),
    Visits(visits::VisitsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Migrate(args) => migrate::run(args).await,
            Commands::Identities(command) => identities::run(command).await,
            Commands::Visits(command) => visits::run(command).await,
        }
    }
}

async fn connect(database_url: &str) -> Result<PgPool, String> {
    database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
