//! Shopping cart handlers.

use axum::Json;
use axum::extract::{Path, State};

use aynbeauty_service::cart::CartView;

use crate::dto::request::{AddCartItemRequest, UpdateQuantityRequest, validate_body};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/cart
pub async fn get_cart(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CartView>>, ApiError> {
    let cart = state.cart_service.view(auth.user_id()).await?;
    Ok(Json(ApiResponse::ok(cart)))
}

/// POST /api/cart/items
pub async fn add_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AddCartItemRequest>,
) -> Result<Json<ApiResponse<CartView>>, ApiError> {
    validate_body(&req)?;
    let cart = state
        .cart_service
        .add_item(auth.user_id(), req.product_id, req.quantity)
        .await?;
    Ok(Json(ApiResponse::ok(cart)))
}

/// PUT /api/cart/items/{productId}
pub async fn set_quantity(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<i64>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<ApiResponse<CartView>>, ApiError> {
    validate_body(&req)?;
    let cart = state
        .cart_service
        .set_quantity(auth.user_id(), product_id, req.quantity)
        .await?;
    Ok(Json(ApiResponse::ok(cart)))
}

/// DELETE /api/cart/items/{productId}
pub async fn remove_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<i64>,
) -> Result<Json<ApiResponse<CartView>>, ApiError> {
    let cart = state
        .cart_service
        .remove_item(auth.user_id(), product_id)
        .await?;
    Ok(Json(ApiResponse::ok(cart)))
}

/// DELETE /api/cart
pub async fn clear_cart(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.cart_service.clear(auth.user_id()).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Cart cleared".to_string(),
    })))
}
