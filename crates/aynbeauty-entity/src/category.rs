//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category together with its product count, for the navigation menu.
/// Inactive categories are filtered out before this projection is built.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    /// Unique category identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL-safe identifier used in filter links.
    pub slug: String,
    /// Parent category, for nested menus.
    pub parent_id: Option<i64>,
    /// Display order among sibling categories.
    pub sort_order: i32,
    /// Number of products assigned to this category.
    pub product_count: i64,
}
