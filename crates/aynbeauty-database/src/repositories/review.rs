//! Review repository implementation.

use sqlx::PgPool;

use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_core::result::AppResult;
use aynbeauty_entity::review::{CreateReview, Review, ReviewWithAuthor};

/// Repository for review submission and moderation.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a product's approved reviews with author names, newest first.
    pub async fn list_approved_for_product(
        &self,
        product_id: i64,
    ) -> AppResult<Vec<ReviewWithAuthor>> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, r.product_id, r.rating, r.title, r.body, \
                    u.first_name AS author_name, r.created_at \
             FROM reviews r \
             JOIN users u ON u.id = r.user_id \
             WHERE r.product_id = $1 AND r.is_approved = TRUE \
             ORDER BY r.created_at DESC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))
    }

    /// Submit a new review. One review per user per product.
    pub async fn create(&self, data: &CreateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (product_id, user_id, rating, title, body) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.product_id)
        .bind(data.user_id)
        .bind(data.rating)
        .bind(&data.title)
        .bind(&data.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("reviews_product_id_user_id_key") =>
            {
                AppError::conflict("You have already reviewed this product")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create review", e),
        })
    }

    /// Set a review's moderation flag.
    pub async fn set_approval(&self, review_id: i64, approved: bool) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET is_approved = $2 WHERE id = $1 RETURNING *",
        )
        .bind(review_id)
        .bind(approved)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update review", e))?
        .ok_or_else(|| AppError::not_found(format!("Review {review_id} not found")))
    }
}
