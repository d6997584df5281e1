//! Catalog JSON API Server

use std::process;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use catalog_app::{context::AppContext, scheduler};

use crate::{config::ServerConfig, state::State};

mod config;
mod envelope;
mod extensions;
mod healthcheck;
mod mail;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Catalog JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let mut config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let background = CancellationToken::new();
    let heartbeat = scheduler::spawn_heartbeat(config.scheduler.period(), background.clone());

    let app = match AppContext::initialize(
        config.database.settings(),
        config.mail.take_mailer_config(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            background.cancel();
            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(router::app_router());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    let signals = background.clone();
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, signals).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;

    // The server can also stop without a signal; stop the ticker either way.
    background.cancel();

    match heartbeat.await {
        Ok(ticks) => info!(ticks, "server stopped"),
        Err(join_error) => error!("scheduler task failed: {join_error}"),
    }
}
