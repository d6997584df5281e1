//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductFilter, ProductPatch},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::SqliteProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteProductsService {
    db: Db,
    repository: SqliteProductsRepository,
}

impl SqliteProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for SqliteProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        self.repository.list_products(self.db.pool(), &filter).await
    }

    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        self.repository.get_product(self.db.pool(), product).await
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let created = self
            .repository
            .create_product(self.db.pool(), product, Timestamp::now())
            .await?;

        debug!(product_id = %created.id, code = %created.code, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<ProductRecord>, ProductsServiceError> {
        if patch.is_empty() {
            debug!(product_id = %product, "empty patch, touching updated_at only");
        }

        self.repository
            .update_product(self.db.pool(), product, patch, Timestamp::now())
            .await
    }

    async fn delete_product(&self, product: ProductId) -> Result<bool, ProductsServiceError> {
        let rows_affected = self
            .repository
            .delete_product(self.db.pool(), product, Timestamp::now())
            .await?;

        Ok(rows_affected > 0)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves live products matching every supplied filter, ordered by id.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single live product, `None` when absent or soft-deleted.
    async fn get_product(
        &self,
        product: ProductId,
    ) -> Result<Option<ProductRecord>, ProductsServiceError>;

    /// Creates a new product; the id is assigned by storage.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies a sparse patch. Returns `None` when no live product has the id.
    async fn update_product(
        &self,
        product: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<ProductRecord>, ProductsServiceError>;

    /// Soft-deletes a product. Returns whether a live product was deleted.
    async fn delete_product(&self, product: ProductId) -> Result<bool, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_product(code: &str, price: u64) -> NewProduct {
        NewProduct {
            code: code.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn create_product_assigns_id_and_keeps_fields() -> TestResult {
        let ctx = TestContext::new().await?;

        let product = ctx
            .products
            .create_product(new_product("iPhone", 20000))
            .await?;

        assert!(product.id.into_i64() > 0, "id should be storage assigned");
        assert_eq!(product.code, "iPhone");
        assert_eq!(product.price, 20000);
        assert_eq!(product.created_at, product.updated_at);
        assert!(product.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_code_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await?;

        ctx.products
            .create_product(new_product("iPhone", 100))
            .await?;

        let result = ctx.products.create_product(new_product("iPhone", 200)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_price_beyond_storage_range_is_rejected() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx.products.create_product(new_product("Pixel", u64::MAX)).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidPrice(_))),
            "expected InvalidPrice, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await?;

        let created = ctx
            .products
            .create_product(new_product("iPhone", 1500))
            .await?;

        let product = ctx.products.get_product(created.id).await?;

        assert_eq!(product, Some(created));

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_none() -> TestResult {
        let ctx = TestContext::new().await?;

        let product = ctx.products.get_product(ProductId::from_i64(87)).await?;

        assert!(product.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_hides_product_but_keeps_row() -> TestResult {
        let ctx = TestContext::new().await?;

        let created = ctx.products.create_product(new_product("iPhone", 300)).await?;

        assert!(ctx.products.delete_product(created.id).await?);
        assert!(ctx.products.get_product(created.id).await?.is_none());

        let stored: i64 = query_scalar(
            "SELECT COUNT(*) FROM products WHERE id = ?1 AND deleted_at IS NOT NULL",
        )
        .bind(created.id.into_i64())
        .fetch_one(ctx.db.pool())
        .await?;

        assert_eq!(stored, 1, "soft-deleted row should remain stored");

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_twice_reports_false_second_time() -> TestResult {
        let ctx = TestContext::new().await?;

        let created = ctx.products.create_product(new_product("iPhone", 300)).await?;

        assert!(ctx.products.delete_product(created.id).await?);
        assert!(!ctx.products.delete_product(created.id).await?);

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_deletes_of_one_product_report_exactly_one_success() -> TestResult {
        let ctx = TestContext::new().await?;

        for round in 0..10 {
            let created = ctx
                .products
                .create_product(new_product(&format!("iPhone-{round}"), 300))
                .await?;

            let (a, b, c) = tokio::join!(
                ctx.products.delete_product(created.id),
                ctx.products.delete_product(created.id),
                ctx.products.delete_product(created.id),
            );

            let successes = [a?, b?, c?].into_iter().filter(|deleted| *deleted).count();

            assert_eq!(successes, 1, "round {round}: expected a single successful delete");
            assert_eq!(ctx.products.get_product(created.id).await?, None);
        }

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_id_returns_false() -> TestResult {
        let ctx = TestContext::new().await?;

        assert!(!ctx.products.delete_product(ProductId::from_i64(87)).await?);

        Ok(())
    }

    #[tokio::test]
    async fn deleted_code_can_be_reused() -> TestResult {
        let ctx = TestContext::new().await?;

        let first = ctx.products.create_product(new_product("iPhone", 100)).await?;

        ctx.products.delete_product(first.id).await?;

        let second = ctx.products.create_product(new_product("iPhone", 200)).await?;

        assert!(second.id > first.id, "ids must never be reused");

        Ok(())
    }

    #[tokio::test]
    async fn update_product_changes_only_patched_fields() -> TestResult {
        let ctx = TestContext::new().await?;

        let created = ctx.products.create_product(new_product("iPhone", 500)).await?;

        let updated = ctx
            .products
            .update_product(
                created.id,
                ProductPatch {
                    code: None,
                    price: Some(999),
                },
            )
            .await?
            .ok_or("product should exist")?;

        assert_eq!(updated.code, "iPhone");
        assert_eq!(updated.price, 999);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_writes_empty_code() -> TestResult {
        let ctx = TestContext::new().await?;

        let created = ctx.products.create_product(new_product("iPhone", 500)).await?;

        let updated = ctx
            .products
            .update_product(
                created.id,
                ProductPatch {
                    code: Some(String::new()),
                    price: None,
                },
            )
            .await?
            .ok_or("product should exist")?;

        assert_eq!(updated.code, "");
        assert_eq!(updated.price, 500);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_or_deleted_id_returns_none() -> TestResult {
        let ctx = TestContext::new().await?;

        let created = ctx.products.create_product(new_product("iPhone", 500)).await?;

        ctx.products.delete_product(created.id).await?;

        let patch = ProductPatch {
            code: None,
            price: Some(1),
        };

        assert!(
            ctx.products
                .update_product(created.id, patch.clone())
                .await?
                .is_none()
        );
        assert!(
            ctx.products
                .update_product(ProductId::from_i64(87), patch)
                .await?
                .is_none()
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_product_to_taken_code_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await?;

        ctx.products.create_product(new_product("iPhone", 100)).await?;
        let pixel = ctx.products.create_product(new_product("Pixel", 100)).await?;

        let result = ctx
            .products
            .update_product(
                pixel.id,
                ProductPatch {
                    code: Some("iPhone".to_string()),
                    price: None,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_without_filters_returns_live_products_in_id_order() -> TestResult {
        let ctx = TestContext::new().await?;

        let a = ctx.products.create_product(new_product("iPhone", 100)).await?;
        let b = ctx.products.create_product(new_product("Pixel", 200)).await?;
        let c = ctx.products.create_product(new_product("Galaxy", 300)).await?;

        ctx.products.delete_product(b.id).await?;

        let ids: Vec<ProductId> = ctx
            .products
            .list_products(ProductFilter::default())
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![a.id, c.id]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_code_filter_is_case_sensitive_substring() -> TestResult {
        let ctx = TestContext::new().await?;

        ctx.products.create_product(new_product("iPhone", 100)).await?;
        ctx.products.create_product(new_product("Phone Case", 10)).await?;
        ctx.products.create_product(new_product("phoney", 10)).await?;

        let codes: Vec<String> = ctx
            .products
            .list_products(ProductFilter::from_query(Some("Pho"), None))
            .await?
            .into_iter()
            .map(|p| p.code)
            .collect();

        assert_eq!(codes, vec!["Phone Case".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_price_filter_is_inclusive_lower_bound() -> TestResult {
        let ctx = TestContext::new().await?;

        ctx.products.create_product(new_product("a", 99)).await?;
        ctx.products.create_product(new_product("b", 100)).await?;
        ctx.products.create_product(new_product("c", 101)).await?;

        let prices: Vec<u64> = ctx
            .products
            .list_products(ProductFilter::from_query(None, Some("100")))
            .await?
            .into_iter()
            .map(|p| p.price)
            .collect();

        assert_eq!(prices, vec![100, 101]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_combined_filters_intersect() -> TestResult {
        let ctx = TestContext::new().await?;

        ctx.products.create_product(new_product("iPhone 13", 20000)).await?;
        ctx.products.create_product(new_product("iPhone SE", 9000)).await?;
        ctx.products.create_product(new_product("Pixel", 30000)).await?;

        let codes: Vec<String> = ctx
            .products
            .list_products(ProductFilter::from_query(Some("iPhone"), Some("10000")))
            .await?
            .into_iter()
            .map(|p| p.code)
            .collect();

        assert_eq!(codes, vec!["iPhone 13".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_requests_share_one_handle() -> TestResult {
        let ctx = TestContext::new().await?;

        let (a, b) = tokio::join!(
            ctx.products.create_product(new_product("iPhone", 1)),
            ctx.products.create_product(new_product("Pixel", 2)),
        );

        assert_ne!(a?.id, b?.id);

        Ok(())
    }
}
