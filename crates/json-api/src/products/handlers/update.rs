//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use catalog_app::domain::products::data::ProductPatch;

use crate::{
    envelope::{Envelope, Outcome},
    extensions::*,
    products::handlers::product_id,
    state::State,
};

/// Update Product Request
///
/// Absent fields are left untouched. Unknown keys are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct UpdateProductRequest {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "super::price::deserialize_optional")]
    pub price: Option<u64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        ProductPatch {
            code: request.code,
            price: request.price,
        }
    }
}

/// Update Product Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<Outcome>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = match product_id(req) {
        Ok(product) => product,
        Err(error) => return Ok(Json(Envelope::outcome(Err(error)))),
    };

    let request = match req.json_payload::<UpdateProductRequest>().await {
        Ok(request) => request,
        Err(error) => return Ok(Json(Envelope::outcome(Err(error)))),
    };

    let result = state
        .app
        .products
        .update_product(product, request.into())
        .await
        .inspect(|updated| info!(product_id = %product, updated = updated.is_some(), "updated product"))
        .inspect_err(|error| warn!(operation = "products.update", product_id = %product, "{error}"))
        .map(|updated| updated.is_some());

    Ok(Json(Envelope::outcome(result)))
}
