//! Route definitions for the AynBeauty HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use aynbeauty_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.uploads.max_size_bytes();

    let api_routes = Router::new()
        .merge(catalog_routes())
        .merge(auth_routes())
        .merge(cart_routes())
        .merge(wishlist_routes())
        .merge(order_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Public catalog endpoints: products, categories, brands, reviews.
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::products::list_products))
        .route("/products/{id}", get(handlers::products::get_product))
        .route(
            "/products/{id}/reviews",
            get(handlers::products::list_reviews).post(handlers::products::create_review),
        )
        .route("/categories", get(handlers::categories::list_categories))
        .route("/brands", get(handlers::brands::list_brands))
}

/// Auth endpoints: register, login, OTP flow, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/otp/request", post(handlers::auth::otp_request))
        .route("/auth/otp/verify", post(handlers::auth::otp_verify))
        .route("/auth/me", get(handlers::auth::me))
}

/// Cart endpoints (bearer-authenticated).
fn cart_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cart",
            get(handlers::cart::get_cart).delete(handlers::cart::clear_cart),
        )
        .route("/cart/items", post(handlers::cart::add_item))
        .route(
            "/cart/items/{productId}",
            put(handlers::cart::set_quantity).delete(handlers::cart::remove_item),
        )
}

/// Wishlist endpoints (bearer-authenticated).
fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/wishlist", get(handlers::wishlist::get_wishlist))
        .route("/wishlist/items", post(handlers::wishlist::add_item))
        .route(
            "/wishlist/items/{productId}",
            delete(handlers::wishlist::remove_item),
        )
}

/// Order endpoints (bearer-authenticated).
fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            post(handlers::orders::place_order).get(handlers::orders::list_my_orders),
        )
        .route("/orders/{id}", get(handlers::orders::get_order))
        .route("/orders/{id}/whatsapp", get(handlers::orders::whatsapp_link))
}

/// Admin-only endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/dashboard",
            get(handlers::admin::dashboard::dashboard),
        )
        .route("/admin/orders", get(handlers::admin::orders::list_orders))
        .route(
            "/admin/orders/{id}/status",
            put(handlers::admin::orders::update_status),
        )
        .route(
            "/admin/products/{id}/images",
            post(handlers::admin::images::upload_image).get(handlers::admin::images::list_images),
        )
        .route(
            "/admin/products/{id}/images/{imageId}/primary",
            put(handlers::admin::images::set_primary_image),
        )
        .route(
            "/admin/products/{id}/images/{imageId}",
            delete(handlers::admin::images::delete_image),
        )
        .route(
            "/admin/reviews/{id}/approval",
            put(handlers::admin::reviews::set_approval),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use axum::http::{HeaderName, HeaderValue, Method};
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors.max_age(Duration::from_secs(config.max_age_seconds))
}
