//! Listener settings for the catalog HTTP server.

use clap::Args;

/// Address the JSON API binds to.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to listen on; all interfaces by default
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port for the product and mail endpoints
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port` in the form `TcpListener::new` accepts.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
