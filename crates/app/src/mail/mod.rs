//! Outbound mail

mod errors;
mod smtp;

pub use errors::MailError;
pub use smtp::*;

/// A single plaintext message. Exists only for the duration of one send; the
/// sender and relay credentials come from [`MailerConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub to: String,
    pub title: String,
    pub message: String,
}
