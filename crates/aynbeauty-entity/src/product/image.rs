//! Product image entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Unique image identifier.
    pub id: i64,
    /// The product this image belongs to.
    pub product_id: i64,
    /// Public URL of the stored image.
    pub image_url: String,
    /// Public URL of the generated thumbnail.
    pub thumbnail_url: Option<String>,
    /// Whether this is the product's primary image.
    pub is_primary: bool,
    /// Display order among the product's images.
    pub sort_order: i32,
    /// When the image was uploaded.
    pub created_at: DateTime<Utc>,
}
