//! `AuthUser` extractor — pulls the JWT from the Authorization header and validates it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use aynbeauty_auth::Claims;
use aynbeauty_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Validated claims of the authenticated caller, available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the inner claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode(token)?;

        Ok(AuthUser(claims))
    }
}
