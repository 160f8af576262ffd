//! Aggregated product listing row.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One product as returned by the catalog listing query.
///
/// Joins the base product row with its category, brand, approved-review
/// aggregates, and primary image. Produced by the product query builder;
/// the same shape heads the product detail response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
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
    /// Shown in the trending rail.
    pub is_trending: bool,
    /// Shown in the must-have (featured) rail.
    pub is_must_have: bool,
    /// Shown in the new-arrivals rail.
    pub is_new_arrival: bool,
    /// Name of the owning category, when assigned.
    pub category_name: Option<String>,
    /// Slug of the owning category, when assigned.
    pub category_slug: Option<String>,
    /// Brand name, `"Unknown"` for brand-less products.
    pub brand_name: String,
    /// Mean rating over approved reviews, `0` when unreviewed.
    pub average_rating: f64,
    /// Number of approved reviews.
    pub review_count: i64,
    /// URL of the primary image, when one exists.
    pub primary_image: Option<String>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}
