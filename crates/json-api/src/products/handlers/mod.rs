//! Product Handlers

use salvo::Request;
use serde::{Deserialize, Serialize};

use catalog_app::{
    domain::products::records::{ProductId, ProductRecord},
    ids::TypedIdError,
};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
mod price;
pub(crate) mod update;

/// Product as rendered in envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Storage assigned identifier
    pub id: i64,

    /// Product code, unique among live products
    pub code: String,

    /// Price in minor units
    pub price: u64,

    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            code: product.code,
            price: product.price,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
            deleted_at: product.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

fn product_id(req: &Request) -> Result<ProductId, TypedIdError> {
    req.param::<String>("id").unwrap_or_default().parse()
}
