//! Wishlist handlers.

use axum::Json;
use axum::extract::{Path, State};

use aynbeauty_entity::wishlist::WishlistLine;

use crate::dto::request::{AddWishlistItemRequest, validate_body};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/wishlist
pub async fn get_wishlist(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<WishlistLine>>>, ApiError> {
    let items = state.wishlist_service.view(auth.user_id()).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/wishlist/items
pub async fn add_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AddWishlistItemRequest>,
) -> Result<Json<ApiResponse<Vec<WishlistLine>>>, ApiError> {
    validate_body(&req)?;
    let items = state
        .wishlist_service
        .add_item(auth.user_id(), req.product_id)
        .await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// DELETE /api/wishlist/items/{productId}
pub async fn remove_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<WishlistLine>>>, ApiError> {
    let items = state
        .wishlist_service
        .remove_item(auth.user_id(), product_id)
        .await?;
    Ok(Json(ApiResponse::ok(items)))
}
