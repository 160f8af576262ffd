//! Admin product image handlers — multipart upload and management.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use bytes::Bytes;

use aynbeauty_core::error::AppError;
use aynbeauty_entity::product::ProductImage;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// POST /api/admin/products/{id}/images — multipart upload
///
/// Expects one part named `image` carrying the file.
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ProductImage>>, ApiError> {
    require_admin(&auth)?;

    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("image") {
            file_name = field.file_name().map(String::from);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?,
            );
        }
    }

    let data = data.ok_or_else(|| AppError::validation("Field 'image' is required"))?;
    let file_name =
        file_name.ok_or_else(|| AppError::validation("Uploaded image must have a filename"))?;

    let image = state
        .image_service
        .upload(product_id, &file_name, data)
        .await?;
    Ok(Json(ApiResponse::ok(image)))
}

/// GET /api/admin/products/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(product_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ProductImage>>>, ApiError> {
    require_admin(&auth)?;
    let images = state.image_service.list(product_id).await?;
    Ok(Json(ApiResponse::ok(images)))
}

/// PUT /api/admin/products/{id}/images/{imageId}/primary
pub async fn set_primary_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((product_id, image_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<ProductImage>>, ApiError> {
    require_admin(&auth)?;
    let image = state.image_service.set_primary(product_id, image_id).await?;
    Ok(Json(ApiResponse::ok(image)))
}

/// DELETE /api/admin/products/{id}/images/{imageId}
pub async fn delete_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((product_id, image_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;
    state.image_service.delete(product_id, image_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Image deleted".to_string(),
    })))
}
