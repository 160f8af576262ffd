//! Brand repository implementation.

use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::brand::BrandWithCount;

/// Repository for brand lookups.
#[derive(Debug, Clone)]
pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    /// Create a new brand repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active brands with their product counts, featured first.
    pub async fn list_active_with_counts(&self) -> AppResult<Vec<BrandWithCount>> {
        sqlx::query_as::<_, BrandWithCount>(
            "SELECT b.id, b.name, b.slug, b.is_featured, \
                    COUNT(p.id) AS product_count \
             FROM brands b \
             LEFT JOIN products p ON p.brand_id = b.id \
             WHERE b.is_active = TRUE \
             GROUP BY b.id \
             ORDER BY b.is_featured DESC, b.name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list brands", e))
    }
}
