use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(ApiError::BadRequest(
            "Must include username and password".to_string(),
        ));
    };

    let user = state
        .auth_service
        .authenticate_user(&username, &password)
        .await
        .map_err(ApiError::from)?;

    let claims = auth::Claims::for_user(
        user.id,
        user.username.as_str(),
        user.full_name.as_str(),
        state.token_ttl_seconds,
    );

    let auth_token = state.token_service.issue(&claims).map_err(|e| {
        tracing::error!(error = %e, "Token issuance failed");
        ApiError::InternalServerError("Token generation failed".to_string())
    })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData { auth_token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}
