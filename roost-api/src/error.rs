use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roost_core::{CoreError, RepoError};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err.downcast::<CoreError>() {
            Ok(core) => match *core {
                CoreError::ValidationError(msg) => AppError::ValidationError(msg),
                CoreError::NotFound(msg) => AppError::NotFoundError(msg),
                CoreError::InternalError(msg) => AppError::InternalServerError(msg),
            },
            Err(other) => AppError::InternalServerError(other.to_string()),
        }
    }
}
