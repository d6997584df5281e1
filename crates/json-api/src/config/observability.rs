//! Log output settings.

use clap::Args;

/// How log lines are rendered on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event, for terminals.
    Compact,

    /// One JSON object per event, with the active request span attached.
    Json,
}

/// Logging settings. `RUST_LOG` directives win over `--log-level`.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` holds no directives
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// compact or json
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
