//! Wishlist repository implementation.

use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::wishlist::WishlistLine;

/// Repository for wishlist row operations.
#[derive(Debug, Clone)]
pub struct WishlistRepository {
    pool: PgPool,
}

impl WishlistRepository {
    /// Create a new wishlist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a user's wishlist joined with product display fields.
    pub async fn list_lines(&self, user_id: i64) -> AppResult<Vec<WishlistLine>> {
        sqlx::query_as::<_, WishlistLine>(
            "SELECT wi.product_id, p.name AS product_name, p.price, p.discounted_price, \
                    p.stock_quantity, \
                    (SELECT pi.image_url FROM product_images pi WHERE pi.product_id = p.id \
                     ORDER BY pi.is_primary DESC, pi.sort_order ASC LIMIT 1) AS primary_image, \
                    wi.created_at \
             FROM wishlist_items wi \
             JOIN products p ON p.id = wi.product_id \
             WHERE wi.user_id = $1 \
             ORDER BY wi.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list wishlist", e))
    }

    /// Save a product to the wishlist. Saving twice is a no-op.
    pub async fn add(&self, user_id: i64, product_id: i64) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO wishlist_items (user_id, product_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, product_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add to wishlist", e))?;
        Ok(())
    }

    /// Remove a product from the wishlist.
    pub async fn remove(&self, user_id: i64, product_id: i64) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM wishlist_items WHERE user_id = $1 AND product_id = $2")
                .bind(user_id)
                .bind(product_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove from wishlist", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
