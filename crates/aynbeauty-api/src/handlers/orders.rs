//! Order handlers — placement, history, and WhatsApp handoff.

use axum::Json;
use axum::extract::{Path, Query, State};

use aynbeauty_service::order::{OrderPage, OrderView};

use crate::dto::request::{PlaceOrderRequest, validate_body};
use crate::dto::response::{ApiResponse, WhatsAppLinkResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/orders
pub async fn place_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<Json<ApiResponse<OrderView>>, ApiError> {
    validate_body(&req)?;
    let view = state
        .order_service
        .place(auth.user_id(), req.into_service_request())
        .await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// GET /api/orders
pub async fn list_my_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<OrderPage>>, ApiError> {
    let page = params.into_page_request()?;
    let orders = state.order_service.my_orders(auth.user_id(), page).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<OrderView>>, ApiError> {
    let view = state
        .order_service
        .get(auth.user_id(), auth.is_admin(), id)
        .await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// GET /api/orders/{id}/whatsapp
pub async fn whatsapp_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<WhatsAppLinkResponse>>, ApiError> {
    let link = state
        .order_service
        .whatsapp_link(auth.user_id(), auth.is_admin(), id)
        .await?;
    Ok(Json(ApiResponse::ok(WhatsAppLinkResponse { link })))
}
