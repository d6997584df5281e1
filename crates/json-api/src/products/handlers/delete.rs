//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::{info, warn};

use crate::{
    envelope::{Envelope, Outcome},
    extensions::*,
    products::handlers::product_id,
    state::State,
};

/// Delete Product Handler
///
/// Soft-deletes the product. Deleting an unknown or already deleted product
/// reports `isSuccess: false` without an error.
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

    let result = state
        .app
        .products
        .delete_product(product)
        .await
        .inspect(|deleted| info!(product_id = %product, deleted, "deleted product"))
        .inspect_err(|error| warn!(operation = "products.delete", product_id = %product, "{error}"));

    Ok(Json(Envelope::outcome(result)))
}
