//! Cart repository implementation.

use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::cart::{CartItem, CartLine};

/// Cart rows joined with the product fields needed to price them. Shared
/// with order placement, which reads the same lines inside its transaction.
pub(crate) const CART_LINES_SQL: &str =
    "SELECT ci.product_id, p.name AS product_name, p.price, p.discounted_price, \
            p.stock_quantity, \
            (SELECT pi.image_url FROM product_images pi WHERE pi.product_id = p.id \
             ORDER BY pi.is_primary DESC, pi.sort_order ASC LIMIT 1) AS primary_image, \
            ci.quantity \
     FROM cart_items ci \
     JOIN products p ON p.id = ci.product_id \
     WHERE ci.user_id = $1 \
     ORDER BY ci.created_at ASC";

/// Repository for cart row operations.
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: PgPool,
}

impl CartRepository {
    /// Create a new cart repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a user's cart joined with product pricing fields.
    pub async fn list_lines(&self, user_id: i64) -> AppResult<Vec<CartLine>> {
        sqlx::query_as::<_, CartLine>(CART_LINES_SQL)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cart", e))
    }

    /// Add units of a product to the cart.
    ///
    /// Insert-or-increment happens in one statement so two concurrent adds
    /// for the same product both land.
    pub async fn add(&self, user_id: i64, product_id: i64, quantity: i32) -> AppResult<CartItem> {
        sqlx::query_as::<_, CartItem>(
            "INSERT INTO cart_items (user_id, product_id, quantity) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, product_id) \
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity, \
                           updated_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add to cart", e))
    }

    /// Set the quantity of a cart row.
    pub async fn set_quantity(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> AppResult<CartItem> {
        sqlx::query_as::<_, CartItem>(
            "UPDATE cart_items SET quantity = $3, updated_at = NOW() \
             WHERE user_id = $1 AND product_id = $2 RETURNING *",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update cart", e))?
        .ok_or_else(|| AppError::not_found(format!("Product {product_id} is not in the cart")))
    }

    /// Remove a product from the cart.
    pub async fn remove(&self, user_id: i64, product_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove from cart", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove every row of a user's cart.
    pub async fn clear(&self, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear cart", e))?;
        Ok(result.rows_affected())
    }
}
