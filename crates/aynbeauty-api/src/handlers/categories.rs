//! Category listing handler.

use axum::Json;
use axum::extract::State;

use aynbeauty_entity::category::CategoryWithCount;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CategoryWithCount>>>, ApiError> {
    let categories = state.catalog_service.list_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}
