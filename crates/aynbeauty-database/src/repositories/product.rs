//! Product repository implementation.

use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::product::{Product, ProductCard, ProductImage};

use crate::query::product::{ProductQuery, ProductQueryBuilder};

/// Repository for product listing, detail, and image operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the listing query: one page of cards plus the total match count.
    pub async fn search(&self, query: &ProductQuery) -> AppResult<(Vec<ProductCard>, i64)> {
        let builder = ProductQueryBuilder::new(query.clone());

        let mut count = builder.count_query();
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count products", e)
            })?;

        let mut page = builder.page_query();
        let products = page
            .build_query_as::<ProductCard>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list products", e)
            })?;

        Ok((products, total))
    }

    /// Fetch one product as a listing card, with aggregates resolved.
    pub async fn find_card(&self, product_id: i64) -> AppResult<Option<ProductCard>> {
        let mut detail = ProductQueryBuilder::detail_query(product_id);
        detail
            .build_query_as::<ProductCard>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    /// Fetch the raw product row.
    pub async fn find_by_id(&self, product_id: i64) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    // -- Product Images --

    /// List a product's images, primary first.
    pub async fn list_images(&self, product_id: i64) -> AppResult<Vec<ProductImage>> {
        sqlx::query_as::<_, ProductImage>(
            "SELECT * FROM product_images WHERE product_id = $1 \
             ORDER BY is_primary DESC, sort_order ASC, id ASC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list images", e))
    }

    /// Find one image belonging to a product.
    pub async fn find_image(
        &self,
        product_id: i64,
        image_id: i64,
    ) -> AppResult<Option<ProductImage>> {
        sqlx::query_as::<_, ProductImage>(
            "SELECT * FROM product_images WHERE id = $1 AND product_id = $2",
        )
        .bind(image_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find image", e))
    }

    /// Insert an image record. The first image of a product automatically
    /// becomes its primary; later ones append to the sort order.
    pub async fn create_image(
        &self,
        product_id: i64,
        image_url: &str,
        thumbnail_url: Option<&str>,
    ) -> AppResult<ProductImage> {
        sqlx::query_as::<_, ProductImage>(
            "INSERT INTO product_images (product_id, image_url, thumbnail_url, is_primary, sort_order) \
             VALUES ($1, $2, $3, \
                     NOT EXISTS (SELECT 1 FROM product_images WHERE product_id = $1), \
                     COALESCE((SELECT MAX(sort_order) + 1 FROM product_images WHERE product_id = $1), 0)) \
             RETURNING *",
        )
        .bind(product_id)
        .bind(image_url)
        .bind(thumbnail_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create image", e))
    }

    /// Make one image the product's primary, demoting all others.
    pub async fn set_primary_image(
        &self,
        product_id: i64,
        image_id: i64,
    ) -> AppResult<ProductImage> {
        let image = self
            .find_image(product_id, image_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Image {image_id} not found for product {product_id}"
                ))
            })?;

        sqlx::query("UPDATE product_images SET is_primary = (id = $2) WHERE product_id = $1")
            .bind(product_id)
            .bind(image_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set primary image", e)
            })?;

        Ok(ProductImage {
            is_primary: true,
            ..image
        })
    }

    /// Delete an image record, returning it for file cleanup.
    pub async fn delete_image(
        &self,
        product_id: i64,
        image_id: i64,
    ) -> AppResult<Option<ProductImage>> {
        sqlx::query_as::<_, ProductImage>(
            "DELETE FROM product_images WHERE id = $1 AND product_id = $2 RETURNING *",
        )
        .bind(image_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete image", e))
    }
}
