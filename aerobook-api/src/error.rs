use aerobook_core::CoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    TimeoutError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::TimeoutError(msg) => (StatusCode::REQUEST_TIMEOUT, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => AppError::NotFoundError(msg),
            CoreError::Unauthorized(msg) => AppError::AuthenticationError(msg),
            CoreError::ValidationError(msg) => {
                AppError::ValidationError(format!("Validation failed: {}", msg))
            }
            CoreError::Conflict(msg) => AppError::ConflictError(msg),
            CoreError::InternalError(msg) => AppError::InternalServerError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn assert_error(error: AppError, expected_status: StatusCode, expected_message: &str) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn test_core_errors_map_to_status_codes() {
        assert_error(
            CoreError::NotFound("user not found".into()).into(),
            StatusCode::NOT_FOUND,
            "user not found",
        )
        .await;
        assert_error(
            CoreError::Unauthorized("password wrong".into()).into(),
            StatusCode::UNAUTHORIZED,
            "password wrong",
        )
        .await;
        assert_error(
            CoreError::ValidationError("seats must not be negative".into()).into(),
            StatusCode::BAD_REQUEST,
            "Validation failed: seats must not be negative",
        )
        .await;
        assert_error(
            CoreError::Conflict("email already registered".into()).into(),
            StatusCode::CONFLICT,
            "email already registered",
        )
        .await;
    }

    #[tokio::test]
    async fn test_internal_error_detail_is_not_exposed() {
        let err: AppError = CoreError::InternalError("connection refused: 10.0.0.5:5432".into()).into();
        assert_error(err, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
    }
}
