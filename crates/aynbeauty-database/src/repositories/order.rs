//! Order repository implementation.

use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_core::types::PageRequest;
use aynbeauty_entity::cart::{CartLine, CartTotals};
use aynbeauty_entity::order::{Order, OrderItem, OrderStatus, ShippingDetails};

use super::cart::CART_LINES_SQL;

/// Repository for order placement and lookup.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Place an order from the user's cart, inside one transaction.
    ///
    /// Reads the cart, prices each line at its current effective price,
    /// inserts the order with item snapshots, decrements stock with a
    /// `stock_quantity >= quantity` guard, and clears the cart. A failed
    /// guard aborts the whole transaction, so stock never goes negative
    /// and no partial order is left behind.
    pub async fn place(
        &self,
        user_id: i64,
        order_number: &str,
        shipping: &ShippingDetails,
        notes: Option<&str>,
    ) -> AppResult<(Order, Vec<OrderItem>)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let lines = sqlx::query_as::<_, CartLine>(CART_LINES_SQL)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load cart", e))?;

        if lines.is_empty() {
            return Err(AppError::validation("Cannot place an order with an empty cart"));
        }

        let totals = CartTotals::from_lines(&lines);

        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (order_number, user_id, status, subtotal, discount, total, \
                                 shipping_name, shipping_phone, shipping_address_line1, \
                                 shipping_address_line2, shipping_city, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING *",
        )
        .bind(order_number)
        .bind(user_id)
        .bind(OrderStatus::Pending)
        .bind(totals.subtotal)
        .bind(totals.discount)
        .bind(totals.total)
        .bind(&shipping.name)
        .bind(&shipping.phone)
        .bind(&shipping.address_line1)
        .bind(&shipping.address_line2)
        .bind(&shipping.city)
        .bind(notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))?;

        let mut items = Vec::with_capacity(lines.len());
        for line in &lines {
            let decremented = sqlx::query(
                "UPDATE products SET stock_quantity = stock_quantity - $2, updated_at = NOW() \
                 WHERE id = $1 AND stock_quantity >= $2",
            )
            .bind(line.product_id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to decrement stock", e)
            })?;

            if decremented.rows_affected() == 0 {
                return Err(AppError::conflict(format!(
                    "Insufficient stock for '{}'",
                    line.product_name
                )));
            }

            let item = sqlx::query_as::<_, OrderItem>(
                "INSERT INTO order_items (order_id, product_id, product_name, unit_price, quantity) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING *",
            )
            .bind(order.id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.unit_price())
            .bind(line.quantity)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create order item", e)
            })?;
            items.push(item);
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear cart", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit order", e)
        })?;

        Ok((order, items))
    }

    /// Find an order by ID.
    pub async fn find_by_id(&self, order_id: i64) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order", e))
    }

    /// List an order's line items.
    pub async fn list_items(&self, order_id: i64) -> AppResult<Vec<OrderItem>> {
        sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items WHERE order_id = $1 ORDER BY id ASC",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list order items", e))
    }

    /// List a user's orders, newest first.
    pub async fn list_for_user(
        &self,
        user_id: i64,
        page: &PageRequest,
    ) -> AppResult<(Vec<Order>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count orders", e))?;

        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))?;

        Ok((orders, total))
    }

    /// List all orders, optionally narrowed to one status, newest first.
    pub async fn list_all(
        &self,
        status: Option<OrderStatus>,
        page: &PageRequest,
    ) -> AppResult<(Vec<Order>, i64)> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM orders WHERE ($1::order_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count orders", e))?;

        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE ($1::order_status IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))?;

        Ok((orders, total))
    }

    /// Update an order's status.
    pub async fn update_status(&self, order_id: i64, status: OrderStatus) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(order_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update order", e))?
        .ok_or_else(|| AppError::not_found(format!("Order {order_id} not found")))
    }
}
