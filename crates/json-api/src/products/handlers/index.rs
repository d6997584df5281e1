//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::warn;

use catalog_app::domain::products::data::ProductFilter;

use crate::{
    envelope::Envelope, extensions::*, products::handlers::ProductResponse, state::State,
};

/// Product Index Handler
///
/// `?code=` keeps products whose code contains the value (case-sensitive),
/// `?price=` keeps products priced at or above it. Both are optional.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Envelope<Vec<ProductResponse>>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let code = req.query::<String>("code");
    let price = req.query::<String>("price");
    let filter = ProductFilter::from_query(code.as_deref(), price.as_deref());

    let envelope = match state.app.products.list_products(filter).await {
        Ok(products) => Envelope::ok(products.into_iter().map(Into::into).collect()),
        Err(error) => {
            warn!(operation = "products.index", "{error}");

            Envelope::failed(error, Some(Vec::new()))
        }
    };

    Ok(Json(envelope))
}
