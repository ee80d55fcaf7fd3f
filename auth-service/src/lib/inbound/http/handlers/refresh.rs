use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Reissue a session token from the claims of a still-valid one.
///
/// The bearer token was already verified by the middleware; the new
/// token carries the embedded user claim unchanged with a fresh expiry.
/// There is no repository re-lookup, so a deleted account can refresh
/// until its current token expires naturally.
pub async fn refresh(
    State(state): State<AppState>,
    Extension(claims): Extension<auth::Claims>,
) -> Result<ApiSuccess<RefreshResponseData>, ApiError> {
    let user = claims.user;
    let claims = auth::Claims::for_user(
        user.id,
        user.username,
        user.full_name,
        state.token_ttl_seconds,
    );

    let auth_token = state.token_service.issue(&claims).map_err(|e| {
        tracing::error!(error = %e, "Token issuance failed");
        ApiError::InternalServerError("Token generation failed".to_string())
    })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RefreshResponseData { auth_token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}
