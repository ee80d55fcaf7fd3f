use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

/// Middleware that verifies the bearer session token and stashes its
/// claims in request extensions.
///
/// All verification failures (bad signature, expired, malformed) return
/// the same 401 body; the specific reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims: auth::Claims = state.token_service.verify(token).map_err(|e| {
        let reason = AuthError::from(e);
        tracing::warn!(error = %reason, "Session token rejected");
        unauthorized("Invalid credentials")
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    if !auth_str.starts_with("Bearer ") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
