//! Sales analytics dashboard handler.

use axum::Json;
use axum::extract::State;

use aynbeauty_service::admin::DashboardReport;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardReport>>, ApiError> {
    require_admin(&auth)?;
    let report = state.dashboard_service.generate().await?;
    Ok(Json(ApiResponse::ok(report)))
}
