//! Database Config

use std::path::PathBuf;

use clap::Args;

use catalog_app::context::DatabaseSettings;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// SQLite database file, created when missing
    #[arg(long, env = "DATABASE_PATH", default_value = "./material/catalog.sqlite3")]
    pub database_path: PathBuf,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub database_max_connections: u32,
}

impl DatabaseConfig {
    #[must_use]
    pub fn settings(&self) -> DatabaseSettings<'_> {
        DatabaseSettings {
            path: &self.database_path,
            max_connections: self.database_max_connections,
        }
    }
}
