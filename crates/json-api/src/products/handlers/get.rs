//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::warn;

use crate::{
    envelope::Envelope,
    extensions::*,
    products::handlers::{ProductResponse, product_id},
    state::State,
};

/// Get Product Handler
///
/// Unknown and soft-deleted products yield `result: null`.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = match product_id(req) {
        Ok(product) => product,
        Err(error) => return Ok(Json(Envelope::failed(error, None))),
    };

    let envelope = match state.app.products.get_product(product).await {
        Ok(found) => Envelope::new(found.map(Into::into)),
        Err(error) => {
            warn!(operation = "products.get", product_id = %product, "{error}");

            Envelope::failed(error, None)
        }
    };

    Ok(Json(envelope))
}
