//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use aynbeauty_auth::JwtDecoder;
use aynbeauty_core::config::AppConfig;
use aynbeauty_service::{
    AccountService, CartService, CatalogService, DashboardService, OrderService, OtpService,
    ProductImageService, ReviewService, WishlistService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Product catalog reads.
    pub catalog_service: Arc<CatalogService>,
    /// Shopping cart operations.
    pub cart_service: Arc<CartService>,
    /// Wishlist operations.
    pub wishlist_service: Arc<WishlistService>,
    /// Review submission and moderation.
    pub review_service: Arc<ReviewService>,
    /// Order placement and tracking.
    pub order_service: Arc<OrderService>,
    /// Registration, login, and profile.
    pub account_service: Arc<AccountService>,
    /// Passwordless OTP login.
    pub otp_service: Arc<OtpService>,
    /// Admin sales analytics.
    pub dashboard_service: Arc<DashboardService>,
    /// Admin product image management.
    pub image_service: Arc<ProductImageService>,
}
