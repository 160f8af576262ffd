//! Category repository implementation.

use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::category::CategoryWithCount;

/// Repository for category lookups.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active categories with their product counts, in display order.
    pub async fn list_active_with_counts(&self) -> AppResult<Vec<CategoryWithCount>> {
        sqlx::query_as::<_, CategoryWithCount>(
            "SELECT c.id, c.name, c.slug, c.parent_id, c.sort_order, \
                    COUNT(p.id) AS product_count \
             FROM categories c \
             LEFT JOIN products p ON p.category_id = c.id \
             WHERE c.is_active = TRUE \
             GROUP BY c.id \
             ORDER BY c.sort_order ASC, c.name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }
}
