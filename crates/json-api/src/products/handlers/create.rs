//! Create Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use catalog_app::domain::products::data::NewProduct;

use crate::{
    envelope::{Envelope, Outcome},
    extensions::*,
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CreateProductRequest {
    pub code: String,

    #[serde(deserialize_with = "super::price::deserialize")]
    pub price: u64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            code: request.code,
            price: request.price,
        }
    }
}

/// Create Product Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<Outcome>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = match req.json_payload::<CreateProductRequest>().await {
        Ok(request) => request,
        Err(error) => return Ok(Json(Envelope::outcome(Err(error)))),
    };

    let result = state
        .app
        .products
        .create_product(request.into())
        .await
        .inspect(|product| info!(product_id = %product.id, code = %product.code, "created product"))
        .inspect_err(|error| warn!(operation = "products.create", "{error}"))
        .map(|_| true);

    Ok(Json(Envelope::outcome(result)))
}
