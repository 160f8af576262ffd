//! Wishlist operations.

use std::sync::Arc;

use aynbeauty_core::error::AppError;
use aynbeauty_database::repositories::product::ProductRepository;
use aynbeauty_database::repositories::wishlist::WishlistRepository;
use aynbeauty_entity::wishlist::WishlistLine;

/// Handles wishlist operations for authenticated users.
#[derive(Debug, Clone)]
pub struct WishlistService {
    /// Wishlist repository.
    wishlist_repo: Arc<WishlistRepository>,
    /// Product repository.
    product_repo: Arc<ProductRepository>,
}

impl WishlistService {
    /// Creates a new wishlist service.
    pub fn new(
        wishlist_repo: Arc<WishlistRepository>,
        product_repo: Arc<ProductRepository>,
    ) -> Self {
        Self {
            wishlist_repo,
            product_repo,
        }
    }

    /// Returns the user's wishlist, most recently added first.
    pub async fn view(&self, user_id: i64) -> Result<Vec<WishlistLine>, AppError> {
        self.wishlist_repo.list_lines(user_id).await
    }

    /// Adds a product to the wishlist. Adding twice is a no-op.
    pub async fn add_item(&self, user_id: i64, product_id: i64) -> Result<Vec<WishlistLine>, AppError> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        self.wishlist_repo.add(user_id, product_id).await?;
        self.view(user_id).await
    }

    /// Removes a product from the wishlist.
    pub async fn remove_item(
        &self,
        user_id: i64,
        product_id: i64,
    ) -> Result<Vec<WishlistLine>, AppError> {
        let removed = self.wishlist_repo.remove(user_id, product_id).await?;
        if !removed {
            return Err(AppError::not_found("Wishlist item not found"));
        }

        self.view(user_id).await
    }
}
