use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::UserError;
use crate::user::errors::ValidationError;

pub mod login;
pub mod refresh;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq> {
    status: StatusCode,
    location: Option<String>,
    body: Json<ApiResponseBody<T>>,
}

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.location == other.location
            && self.body.0 == other.body.0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess {
            status,
            location: None,
            body: Json(ApiResponseBody::new(status, data)),
        }
    }

    /// Attach a Location header, for 201 responses pointing at the
    /// created resource.
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(location) = self.location.and_then(|l| HeaderValue::from_str(&l).ok()) {
            response.headers_mut().insert(header::LOCATION, location);
        }
        response
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(validation_err) => validation_err.into(),
            // All authentication failures present the same face to the
            // caller; the specific reason is logged where it occurred.
            UserError::Auth(_) => ApiError::Unauthorized("Invalid credentials".to_string()),
            UserError::Hashing(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::NotTrimmed { .. } => ApiError::UnprocessableEntity(err.to_string()),
            ValidationError::MissingField
            | ValidationError::WrongType
            | ValidationError::BadLength { .. }
            | ValidationError::DuplicateUsername(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::errors::AuthError;

    #[test]
    fn test_not_trimmed_maps_to_422() {
        let err: ApiError = ValidationError::NotTrimmed { field: "password" }.into();
        assert!(matches!(err, ApiError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_other_validation_errors_map_to_400() {
        for err in [
            ValidationError::MissingField,
            ValidationError::WrongType,
            ValidationError::BadLength {
                min: 8,
                max: 72,
                actual: 7,
            },
            ValidationError::DuplicateUsername("user1".to_string()),
        ] {
            assert!(matches!(ApiError::from(err), ApiError::BadRequest(_)));
        }
    }

    #[test]
    fn test_auth_errors_collapse_to_one_message() {
        let messages: Vec<ApiError> = [
            AuthError::Unauthorized,
            AuthError::InvalidSignature,
            AuthError::Expired,
            AuthError::Malformed("bad token".to_string()),
        ]
        .into_iter()
        .map(|e| ApiError::from(UserError::Auth(e)))
        .collect();

        for err in &messages {
            assert_eq!(
                *err,
                ApiError::Unauthorized("Invalid credentials".to_string())
            );
        }
    }
}
