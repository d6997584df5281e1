use clap::{Args, Subcommand};

use catalog_app::database;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Create the schema if it does not exist yet
    Migrate(DatabaseArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate(args) => {
            let pool = args.open().await?;

            database::migrate(&pool)
                .await
                .map_err(|error| format!("failed to migrate database: {error}"))?;

            pool.close().await;

            println!("database is up to date");

            Ok(())
        }
    }
}
