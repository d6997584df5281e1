//! Mail errors.

use lettre::address::AddressError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid {field} address {address:?}: {source}")]
    InvalidAddress {
        field: &'static str,
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp relay error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
