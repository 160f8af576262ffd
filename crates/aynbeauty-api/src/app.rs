//! Application builder — wires repositories, services, and the router.

use std::sync::Arc;

use sqlx::PgPool;

use aynbeauty_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator};
use aynbeauty_core::config::AppConfig;
use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_database::repositories::analytics::AnalyticsRepository;
use aynbeauty_database::repositories::brand::BrandRepository;
use aynbeauty_database::repositories::cart::CartRepository;
use aynbeauty_database::repositories::category::CategoryRepository;
use aynbeauty_database::repositories::order::OrderRepository;
use aynbeauty_database::repositories::otp::OtpRepository;
use aynbeauty_database::repositories::product::ProductRepository;
use aynbeauty_database::repositories::review::ReviewRepository;
use aynbeauty_database::repositories::user::UserRepository;
use aynbeauty_database::repositories::wishlist::WishlistRepository;
use aynbeauty_service::{
    AccountService, CartService, CatalogService, DashboardService, LogOtpDelivery, OrderService,
    OtpDelivery, OtpService, ProductImageService, ReviewService, WhatsAppLinkBuilder,
    WishlistService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Wires repositories, auth primitives, and services into an `AppState`.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let product_repo = Arc::new(ProductRepository::new(db_pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(db_pool.clone()));
    let brand_repo = Arc::new(BrandRepository::new(db_pool.clone()));
    let review_repo = Arc::new(ReviewRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let cart_repo = Arc::new(CartRepository::new(db_pool.clone()));
    let wishlist_repo = Arc::new(WishlistRepository::new(db_pool.clone()));
    let order_repo = Arc::new(OrderRepository::new(db_pool.clone()));
    let otp_repo = Arc::new(OtpRepository::new(db_pool.clone()));
    let analytics_repo = Arc::new(AnalyticsRepository::new(db_pool.clone()));

    // ── Auth primitives ──────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let catalog_service = Arc::new(CatalogService::new(
        Arc::clone(&product_repo),
        Arc::clone(&category_repo),
        Arc::clone(&brand_repo),
        Arc::clone(&review_repo),
    ));
    let cart_service = Arc::new(CartService::new(
        Arc::clone(&cart_repo),
        Arc::clone(&product_repo),
    ));
    let wishlist_service = Arc::new(WishlistService::new(
        Arc::clone(&wishlist_repo),
        Arc::clone(&product_repo),
    ));
    let review_service = Arc::new(ReviewService::new(
        Arc::clone(&review_repo),
        Arc::clone(&product_repo),
    ));
    let order_service = Arc::new(OrderService::new(
        Arc::clone(&order_repo),
        WhatsAppLinkBuilder::new(&config.store),
    ));
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
    ));
    let otp_delivery: Arc<dyn OtpDelivery> = Arc::new(LogOtpDelivery);
    let otp_service = Arc::new(OtpService::new(
        Arc::clone(&user_repo),
        Arc::clone(&otp_repo),
        Arc::clone(&jwt_encoder),
        otp_delivery,
        &config.auth,
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&analytics_repo),
        &config.store,
    ));
    let image_service = Arc::new(ProductImageService::new(
        Arc::clone(&product_repo),
        config.uploads.clone(),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        catalog_service,
        cart_service,
        wishlist_service,
        review_service,
        order_service,
        account_service,
        otp_service,
        dashboard_service,
        image_service,
    }
}

/// Runs the AynBeauty server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting AynBeauty server...");

    let uploads_dir = config.uploads.directory.clone();
    tokio::fs::create_dir_all(&uploads_dir).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to create uploads dir '{uploads_dir}'"),
            e,
        )
    })?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AynBeauty server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
