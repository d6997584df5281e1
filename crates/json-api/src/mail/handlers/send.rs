//! Send Mail Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use catalog_app::mail::Mail;

use crate::{
    envelope::{Envelope, Outcome},
    extensions::*,
    state::State,
};

/// Send Mail Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SendMailRequest {
    pub to: String,
    pub title: String,
    pub message: String,
}

impl From<SendMailRequest> for Mail {
    fn from(request: SendMailRequest) -> Self {
        Mail {
            to: request.to,
            title: request.title,
            message: request.message,
        }
    }
}

/// Send Mail Handler
///
/// Relays one plaintext message. Relay failures are reported in the
/// envelope, never as a transport-level error.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<Outcome>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = match req.json_payload::<SendMailRequest>().await {
        Ok(request) => request,
        Err(error) => return Ok(Json(Envelope::outcome(Err(error)))),
    };

    let to = request.to.clone();

    let result = state
        .app
        .mailer
        .send(request.into())
        .await
        .inspect(|()| info!(%to, "mail sent"))
        .inspect_err(|error| warn!(operation = "mail.send", %to, "{error}"))
        .map(|()| true);

    Ok(Json(Envelope::outcome(result)))
}
