//! Sales analytics queries for the admin dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::order::OrderStatus;
use aynbeauty_entity::user::UserRole;

/// Order count for one status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    /// The order status.
    pub status: OrderStatus,
    /// Number of orders in that status.
    pub count: i64,
}

/// One product ranked by units sold.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    /// The product.
    pub product_id: i64,
    /// Product name as snapshotted on the order lines.
    pub product_name: String,
    /// Total units sold across non-cancelled orders.
    pub units_sold: i64,
    /// Revenue attributed to this product.
    pub revenue: Decimal,
}

/// A product at or below the low-stock threshold.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LowStockProduct {
    /// The product.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Units remaining.
    pub stock_quantity: i32,
}

/// Revenue and order count for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    /// The day.
    pub day: NaiveDate,
    /// Revenue from non-cancelled orders placed that day.
    pub revenue: Decimal,
    /// Number of non-cancelled orders placed that day.
    pub order_count: i64,
}

/// Repository for dashboard aggregate queries. Cancelled orders never
/// count toward revenue figures.
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    /// Create a new analytics repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All-time revenue.
    pub async fn revenue_all_time(&self) -> AppResult<Decimal> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total), 0) FROM orders WHERE status <> $1",
        )
        .bind(OrderStatus::Cancelled)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum revenue", e))
    }

    /// Revenue from orders placed at or after `since`.
    pub async fn revenue_since(&self, since: DateTime<Utc>) -> AppResult<Decimal> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(total), 0) FROM orders \
             WHERE status <> $1 AND created_at >= $2",
        )
        .bind(OrderStatus::Cancelled)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum revenue", e))
    }

    /// Order counts grouped by status.
    pub async fn order_counts_by_status(&self) -> AppResult<Vec<StatusCount>> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM orders GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count orders", e))
    }

    /// Total number of customer accounts.
    pub async fn customer_count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(UserRole::Customer)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count customers", e))
    }

    /// Customer accounts created at or after `since`.
    pub async fn new_customers_since(&self, since: DateTime<Utc>) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE role = $1 AND created_at >= $2",
        )
        .bind(UserRole::Customer)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count customers", e))
    }

    /// Best-selling products by units sold.
    pub async fn top_products(&self, limit: i64) -> AppResult<Vec<TopProduct>> {
        sqlx::query_as::<_, TopProduct>(
            "SELECT oi.product_id, oi.product_name, \
                    SUM(oi.quantity)::bigint AS units_sold, \
                    SUM(oi.unit_price * oi.quantity) AS revenue \
             FROM order_items oi \
             JOIN orders o ON o.id = oi.order_id \
             WHERE o.status <> $1 \
             GROUP BY oi.product_id, oi.product_name \
             ORDER BY units_sold DESC, revenue DESC \
             LIMIT $2",
        )
        .bind(OrderStatus::Cancelled)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rank products", e))
    }

    /// Products at or below the stock threshold, emptiest first.
    pub async fn low_stock(&self, threshold: i32) -> AppResult<Vec<LowStockProduct>> {
        sqlx::query_as::<_, LowStockProduct>(
            "SELECT id, name, stock_quantity FROM products \
             WHERE stock_quantity <= $1 \
             ORDER BY stock_quantity ASC, name ASC",
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list low stock", e)
        })
    }

    /// Daily revenue series for orders placed at or after `since`.
    pub async fn revenue_by_day(&self, since: DateTime<Utc>) -> AppResult<Vec<DailyRevenue>> {
        sqlx::query_as::<_, DailyRevenue>(
            "SELECT DATE(created_at) AS day, \
                    COALESCE(SUM(total), 0) AS revenue, \
                    COUNT(*) AS order_count \
             FROM orders \
             WHERE status <> $1 AND created_at >= $2 \
             GROUP BY DATE(created_at) \
             ORDER BY day ASC",
        )
        .bind(OrderStatus::Cancelled)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to build revenue series", e)
        })
    }
}
