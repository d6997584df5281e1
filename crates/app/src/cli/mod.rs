use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sqlx::SqlitePool;

use catalog_app::database;

mod db;
mod products;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Products(products::ProductsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Products(command) => products::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// SQLite database file
    #[arg(long, env = "DATABASE_PATH", default_value = "./material/catalog.sqlite3")]
    database_path: PathBuf,
}

impl DatabaseArgs {
    pub(crate) async fn open(&self) -> Result<SqlitePool, String> {
        database::open(&self.database_path, 1)
            .await
            .map_err(|error| format!("failed to open {}: {error}", self.database_path.display()))
    }
}
