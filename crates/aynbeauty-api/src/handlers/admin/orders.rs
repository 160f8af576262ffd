//! Admin order management handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};

use aynbeauty_entity::order::{Order, OrderStatus};
use aynbeauty_service::order::OrderPage;

use crate::dto::request::{UpdateOrderStatusRequest, validate_body};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, OrderListParams};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/orders
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<OrderListParams>,
) -> Result<Json<ApiResponse<OrderPage>>, ApiError> {
    require_admin(&auth)?;
    let (status, page) = params.into_parts()?;
    let orders = state.order_service.list_all(status, page).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// PUT /api/admin/orders/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<ApiResponse<Order>>, ApiError> {
    require_admin(&auth)?;
    validate_body(&req)?;
    let status = OrderStatus::from_str(&req.status)?;
    let order = state.order_service.update_status(id, status).await?;
    Ok(Json(ApiResponse::ok(order)))
}
