//! Request body helpers.

use salvo::{Request, http::ParseError};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum BodyError {
    #[error("failed to read request body: {0}")]
    Read(#[from] ParseError),

    #[error("invalid request body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode JSON bodies regardless of the declared content type.
pub(crate) trait RequestExt {
    async fn json_payload<T: DeserializeOwned>(&mut self) -> Result<T, BodyError>;
}

impl RequestExt for Request {
    async fn json_payload<T: DeserializeOwned>(&mut self) -> Result<T, BodyError> {
        let payload = self.payload().await?;

        Ok(serde_json::from_slice(payload)?)
    }
}
