use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<ApiSuccess<RegisterUserResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let user = state.auth_service.register_user(command).await?;

    Ok(
        ApiSuccess::new(StatusCode::CREATED, (&user).into())
            .with_location(format!("/api/users/{}", user.id)),
    )
}

/// HTTP request body for registration (raw JSON).
///
/// `username` and `password` stay untyped so the validator can report
/// wrong-type input instead of letting deserialization reject it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserRequest {
    username: Option<serde_json::Value>,
    password: Option<serde_json::Value>,
    full_name: Option<String>,
}

impl RegisterUserRequest {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        RegisterUserCommand::validate(self.username, self.password, self.full_name)
            .map_err(ApiError::from)
    }
}

/// Sanitized view of the created user: no password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterUserResponseData {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for RegisterUserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            full_name: user.full_name.clone(),
            created_at: user.created_at,
        }
    }
}
