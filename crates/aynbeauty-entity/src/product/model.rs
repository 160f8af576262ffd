//! Product entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product in the AynBeauty catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Regular price.
    pub price: Decimal,
    /// Sale price, when the product is discounted.
    pub discounted_price: Option<Decimal>,
    /// Units currently in stock.
    pub stock_quantity: i32,
    /// Owning category.
    pub category_id: Option<i64>,
    /// Owning brand.
    pub brand_id: Option<i64>,
    /// Shown in the trending rail.
    pub is_trending: bool,
    /// Shown in the must-have (featured) rail.
    pub is_must_have: bool,
    /// Shown in the new-arrivals rail.
    pub is_new_arrival: bool,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether at least one unit can be added to a cart.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}
