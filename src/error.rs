use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dssgroup_contact::InvalidSubmission;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Invalid(#[from] InvalidSubmission),

    #[error("Malformed request body: {0}")]
    BadRequest(String),

    #[error("Unsupported content type, expected JSON or an urlencoded form")]
    UnsupportedMediaType,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Invalid(invalid) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": invalid.errors })),
            )
                .into_response(),
            AppError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AppError::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
        }
    }
}
