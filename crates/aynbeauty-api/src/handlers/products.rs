//! Product catalog handlers — listing, detail, and reviews.

use axum::Json;
use axum::extract::{Path, Query, State};

use aynbeauty_entity::review::{Review, ReviewWithAuthor};
use aynbeauty_service::catalog::{ProductDetail, ProductPage};

use crate::dto::request::{CreateReviewRequest, validate_body};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ProductFilterParams};
use crate::state::AppState;

/// GET /api/products
///
/// The response body is the bare `{products, pagination}` shape the
/// storefront grid consumes, without the usual envelope.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductFilterParams>,
) -> Result<Json<ProductPage>, ApiError> {
    let query = params.into_query()?;
    let page = state.catalog_service.list_products(query).await?;
    Ok(Json(page))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProductDetail>>, ApiError> {
    let detail = state.catalog_service.product_detail(id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// GET /api/products/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ReviewWithAuthor>>>, ApiError> {
    let reviews = state.catalog_service.list_reviews(id).await?;
    Ok(Json(ApiResponse::ok(reviews)))
}

/// POST /api/products/{id}/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<Json<ApiResponse<Review>>, ApiError> {
    validate_body(&req)?;
    let review = state
        .review_service
        .submit(auth.user_id(), id, req.rating, req.title, req.body)
        .await?;
    Ok(Json(ApiResponse::ok(review)))
}
