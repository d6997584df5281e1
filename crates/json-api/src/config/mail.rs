//! Mail Config

use std::fmt::{Debug, Formatter, Result as FmtResult};

use clap::Args;
use zeroize::Zeroizing;

use catalog_app::mail::MailerConfig;

/// SMTP relay settings.
#[derive(Args)]
pub struct MailConfig {
    /// SMTP relay host (STARTTLS)
    #[arg(long, env = "SMTP_HOST", default_value = "smtp.gmail.com")]
    pub smtp_host: String,

    /// SMTP relay port
    #[arg(long, env = "SMTP_PORT", default_value_t = 587)]
    pub smtp_port: u16,

    /// Sender address for outbound mail
    #[arg(long, env = "SMTP_FROM")]
    pub smtp_from: String,

    /// SMTP username
    #[arg(long, env = "SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,
}

impl Debug for MailConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_from", &self.smtp_from)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &self.smtp_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl MailConfig {
    /// Move the relay settings out, wrapping the password for zeroization.
    #[must_use]
    pub fn take_mailer_config(&mut self) -> MailerConfig {
        MailerConfig {
            host: self.smtp_host.clone(),
            port: self.smtp_port,
            from: self.smtp_from.clone(),
            username: self.smtp_username.clone(),
            password: self.smtp_password.take().map(Zeroizing::new),
        }
    }
}
