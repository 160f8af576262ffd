//! Brand entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A brand together with its product count, for the brand index.
/// Inactive brands are filtered out before this projection is built.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BrandWithCount {
    /// Unique brand identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Whether the brand is highlighted on the landing page.
    pub is_featured: bool,
    /// Number of products assigned to this brand.
    pub product_count: i64,
}
