//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    database::{self, DatabaseError, Db},
    domain::products::{ProductsService, SqliteProductsService},
    mail::{MailError, Mailer, MailerConfig, SmtpMailer},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to initialize database")]
    Database(#[from] DatabaseError),

    #[error("failed to initialize mailer")]
    Mail(#[from] MailError),
}

/// Database settings used to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct DatabaseSettings<'a> {
    pub path: &'a Path,
    pub max_connections: u32,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>, mailer: Arc<dyn Mailer>) -> Self {
        Self { products, mailer }
    }

    /// Open and migrate the database, then build the SMTP mailer.
    ///
    /// # Errors
    ///
    /// Returns an error when the database cannot be opened or migrated, or
    /// when the mail relay transport cannot be built.
    pub async fn initialize(
        database: DatabaseSettings<'_>,
        mailer: MailerConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::open(database.path, database.max_connections).await?;

        database::migrate(&pool).await?;

        Ok(Self::new(
            Arc::new(SqliteProductsService::new(Db::new(pool))),
            Arc::new(SmtpMailer::new(mailer)?),
        ))
    }
}
