//! SMTP mailer.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use mockall::automock;
use tracing::info;
use zeroize::Zeroizing;

use crate::mail::{Mail, MailError};

/// Relay settings. The password is wiped from memory on drop.
#[derive(Clone)]
pub struct MailerConfig {
    pub host: String,
    pub port: u16,
    pub from: String,
    pub username: Option<String>,
    pub password: Option<Zeroizing<String>>,
}

impl Debug for MailerConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MailerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("from", &self.from)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one message through the relay. One attempt, no retry.
    async fn send(&self, mail: Mail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    from: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl Debug for SmtpMailer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Build a STARTTLS relay transport. No connection is opened until the
    /// first send.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS parameters for `host` cannot be built.
    pub fn new(config: MailerConfig) -> Result<Self, MailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(username), Some(password)) = (config.username, config.password) {
            builder = builder.credentials(Credentials::new(username, password.to_string()));
        }

        Ok(Self {
            from: config.from,
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: Mail) -> Result<(), MailError> {
        let message = build_message(&self.from, mail)?;

        self.transport.send(message).await?;

        info!("mail sent");

        Ok(())
    }
}

fn parse_mailbox(field: &'static str, address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| MailError::InvalidAddress {
            field,
            address: address.to_string(),
            source,
        })
}

pub(crate) fn build_message(from: &str, mail: Mail) -> Result<Message, MailError> {
    let message = Message::builder()
        .from(parse_mailbox("sender", from)?)
        .to(parse_mailbox("recipient", &mail.to)?)
        .subject(mail.title)
        .header(ContentType::TEXT_PLAIN)
        .body(mail.message)?;

    Ok(message)
}
