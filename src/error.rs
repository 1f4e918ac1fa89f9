use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("required column '{0}' is missing from the movie table")]
    MissingColumn(String),

    #[error("movie '{0}' not found in the catalog")]
    TitleNotFound(String),

    #[error("similarity matrix has no row for movie index {0}")]
    MatrixRowMissing(usize),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::TitleNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MissingColumn(_) | AppError::MatrixRowMissing(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
