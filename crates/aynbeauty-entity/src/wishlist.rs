//! Wishlist entity models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A wishlist row joined with product display fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WishlistLine {
    /// The saved product.
    pub product_id: i64,
    /// Product display name.
    pub product_name: String,
    /// Regular price.
    pub price: Decimal,
    /// Sale price, when the product is discounted.
    pub discounted_price: Option<Decimal>,
    /// Units currently in stock.
    pub stock_quantity: i32,
    /// URL of the product's primary image, when one exists.
    pub primary_image: Option<String>,
    /// When the product was saved.
    pub created_at: DateTime<Utc>,
}
