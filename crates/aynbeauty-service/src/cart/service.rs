//! Cart operations — viewing, adding, updating, and clearing items.

use std::sync::Arc;

use tracing::info;

use aynbeauty_core::error::AppError;
use aynbeauty_database::repositories::cart::CartRepository;
use aynbeauty_database::repositories::product::ProductRepository;
use aynbeauty_entity::cart::{CartLine, CartTotals};

/// The caller's cart with computed totals.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CartView {
    /// Cart lines joined with product data, oldest first.
    pub items: Vec<CartLine>,
    /// Subtotal, discount, and payable total across all lines.
    pub totals: CartTotals,
}

/// Handles cart operations for authenticated users.
#[derive(Debug, Clone)]
pub struct CartService {
    /// Cart repository.
    cart_repo: Arc<CartRepository>,
    /// Product repository.
    product_repo: Arc<ProductRepository>,
}

impl CartService {
    /// Creates a new cart service.
    pub fn new(cart_repo: Arc<CartRepository>, product_repo: Arc<ProductRepository>) -> Self {
        Self {
            cart_repo,
            product_repo,
        }
    }

    /// Returns the user's cart with totals.
    pub async fn view(&self, user_id: i64) -> Result<CartView, AppError> {
        let items = self.cart_repo.list_lines(user_id).await?;
        let totals = CartTotals::from_lines(&items);
        Ok(CartView { items, totals })
    }

    /// Adds a product to the cart, incrementing quantity if already present.
    pub async fn add_item(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<CartView, AppError> {
        if quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }

        let product = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        if !product.is_in_stock() {
            return Err(AppError::conflict(format!(
                "'{}' is out of stock",
                product.name
            )));
        }

        self.cart_repo.add(user_id, product_id, quantity).await?;
        info!(user_id, product_id, quantity, "Added product to cart");

        self.view(user_id).await
    }

    /// Sets the quantity of an existing cart line.
    pub async fn set_quantity(
        &self,
        user_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<CartView, AppError> {
        if quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }

        self.cart_repo
            .set_quantity(user_id, product_id, quantity)
            .await?;

        self.view(user_id).await
    }

    /// Removes one product from the cart.
    pub async fn remove_item(&self, user_id: i64, product_id: i64) -> Result<CartView, AppError> {
        let removed = self.cart_repo.remove(user_id, product_id).await?;
        if !removed {
            return Err(AppError::not_found("Cart item not found"));
        }

        self.view(user_id).await
    }

    /// Empties the user's cart.
    pub async fn clear(&self, user_id: i64) -> Result<(), AppError> {
        let removed = self.cart_repo.clear(user_id).await?;
        info!(user_id, removed, "Cleared cart");
        Ok(())
    }
}
