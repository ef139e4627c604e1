use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use wk_quiz::selection::SelectionError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("no vocabulary entries available")]
    EmptyPool,
    #[error("Cookie error: {0}")]
    Cookie(String),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::EmptyPool => ApiError::EmptyPool,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::EmptyPool => (
                StatusCode::NOT_FOUND,
                "No vocabulary found. Please upload some words first.".to_string(),
            ),
            ApiError::Cookie(_) | ApiError::Jwt(_) | ApiError::Hash(_) | ApiError::Database(_) => {
                tracing::error!("Internal error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
