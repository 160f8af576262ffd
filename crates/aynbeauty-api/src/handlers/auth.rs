//! Auth handlers — register, login, one-time passcodes, me.

use axum::Json;
use axum::extract::State;

use aynbeauty_entity::user::User;

use crate::dto::request::{
    LoginRequest, OtpRequest, OtpVerifyRequest, RegisterRequest, validate_body,
};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Body returned by the OTP request endpoint regardless of whether the
/// email matched an account.
const OTP_SENT: &str = "If an account exists for this email, a code has been sent";

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate_body(&req)?;

    let details = aynbeauty_service::account::RegisterRequest {
        email: req.email,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
        phone: req.phone,
    };
    let (user, issued) = state.account_service.register(details).await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user,
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate_body(&req)?;

    let (user, issued) = state
        .account_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user,
    })))
}

/// POST /api/auth/otp/request
pub async fn otp_request(
    State(state): State<AppState>,
    Json(req): Json<OtpRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_body(&req)?;

    state.otp_service.request_code(&req.email).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: OTP_SENT.to_string(),
    })))
}

/// POST /api/auth/otp/verify
pub async fn otp_verify(
    State(state): State<AppState>,
    Json(req): Json<OtpVerifyRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate_body(&req)?;

    let (user, issued) = state
        .otp_service
        .verify_code(&req.email, &req.code)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: issued.token,
        expires_at: issued.expires_at,
        user,
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.account_service.profile(auth.user_id()).await?;
    Ok(Json(ApiResponse::ok(user)))
}
