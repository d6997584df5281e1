//! Products Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, SqlitePool, query, query_as, sqlite::SqliteRow};

use crate::domain::products::{
    data::{NewProduct, ProductFilter, ProductPatch},
    errors::ProductsServiceError,
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteProductsRepository;

impl SqliteProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        pool: &SqlitePool,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let min_price = filter.min_price.map(i64::try_from).transpose()?;

        let products = query_as::<Sqlite, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.code.as_deref())
            .bind(min_price)
            .fetch_all(pool)
            .await?;

        Ok(products)
    }

    pub(crate) async fn get_product(
        &self,
        pool: &SqlitePool,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let product = query_as::<Sqlite, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_optional(pool)
            .await?;

        Ok(product)
    }

    pub(crate) async fn create_product(
        &self,
        pool: &SqlitePool,
        product: NewProduct,
        now: Timestamp,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let price = i64::try_from(product.price)?;

        let created = query_as::<Sqlite, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.code)
            .bind(price)
            .bind(now.to_string())
            .fetch_one(pool)
            .await?;

        Ok(created)
    }

    pub(crate) async fn update_product(
        &self,
        pool: &SqlitePool,
        product: ProductId,
        patch: ProductPatch,
        now: Timestamp,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        let price = patch.price.map(i64::try_from).transpose()?;

        let updated = query_as::<Sqlite, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(patch.code)
            .bind(price)
            .bind(now.to_string())
            .fetch_optional(pool)
            .await?;

        Ok(updated)
    }

    pub(crate) async fn delete_product(
        &self,
        pool: &SqlitePool,
        product: ProductId,
        now: Timestamp,
    ) -> Result<u64, ProductsServiceError> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(now.to_string())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn decode_timestamp(index: &str, raw: &str) -> sqlx::Result<Timestamp> {
    raw.parse::<Timestamp>().map_err(|e| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, SqliteRow> for ProductRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        let deleted_at = row
            .try_get::<Option<String>, _>("deleted_at")?
            .map(|raw| decode_timestamp("deleted_at", &raw))
            .transpose()?;

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            code: row.try_get("code")?,
            price,
            created_at: decode_timestamp("created_at", row.try_get::<&str, _>("created_at")?)?,
            updated_at: decode_timestamp("updated_at", row.try_get::<&str, _>("updated_at")?)?,
            deleted_at,
        })
    }
}
