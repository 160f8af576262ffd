//! Brand listing handler.

use axum::Json;
use axum::extract::State;

use aynbeauty_entity::brand::BrandWithCount;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/brands
pub async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BrandWithCount>>>, ApiError> {
    let brands = state.catalog_service.list_brands().await?;
    Ok(Json(ApiResponse::ok(brands)))
}
