//! Review submission and moderation.

use std::sync::Arc;

use tracing::info;

use aynbeauty_core::error::AppError;
use aynbeauty_database::repositories::product::ProductRepository;
use aynbeauty_database::repositories::review::ReviewRepository;
use aynbeauty_entity::review::{CreateReview, Review};

/// Handles review submission and admin moderation.
#[derive(Debug, Clone)]
pub struct ReviewService {
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
    /// Product repository.
    product_repo: Arc<ProductRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(review_repo: Arc<ReviewRepository>, product_repo: Arc<ProductRepository>) -> Self {
        Self {
            review_repo,
            product_repo,
        }
    }

    /// Submits a review for a product. New reviews start unapproved and
    /// stay hidden from the storefront until moderated.
    pub async fn submit(
        &self,
        user_id: i64,
        product_id: i64,
        rating: i32,
        title: Option<String>,
        body: Option<String>,
    ) -> Result<Review, AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }

        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        let review = self
            .review_repo
            .create(&CreateReview {
                product_id,
                user_id,
                rating,
                title,
                body,
            })
            .await?;

        info!(user_id, product_id, rating, "Review submitted");
        Ok(review)
    }

    /// Approves or rejects a review (admin moderation).
    pub async fn set_approval(&self, review_id: i64, approved: bool) -> Result<Review, AppError> {
        let review = self.review_repo.set_approval(review_id, approved).await?;
        info!(review_id, approved, "Review moderated");
        Ok(review)
    }
}
