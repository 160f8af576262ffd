//! Admin review moderation handlers.

use axum::Json;
use axum::extract::{Path, State};

use aynbeauty_entity::review::Review;

use crate::dto::request::SetApprovalRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// PUT /api/admin/reviews/{id}/approval
pub async fn set_approval(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(review_id): Path<i64>,
    Json(req): Json<SetApprovalRequest>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    require_admin(&auth)?;
    let review = state
        .review_service
        .set_approval(review_id, req.approved)
        .await?;
    Ok(Json(ApiResponse::ok(review)))
}
