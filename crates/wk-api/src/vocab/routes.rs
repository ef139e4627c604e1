use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::parser;
use crate::{ApiState, auth::AuthUser, error::ApiError};
use wk_db::{models::VocabEntry, repositories::vocab};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/vocab/upload", post(upload))
        .route("/vocab/list", get(list))
}

#[derive(Debug, Deserialize)]
struct UploadRequest {
    text: String,
    /// Section applied to lines without their own section field.
    section: Option<String>,
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    count: u64,
}

async fn upload(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(payload): Json<UploadRequest>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    if payload.text.trim().is_empty() {
        return Err(ApiError::Validation(
            "Vocabulary text is required".to_string(),
        ));
    }

    let section = payload
        .section
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let entries = parser::parse_upload(&payload.text, section);

    if entries.is_empty() {
        return Err(ApiError::Validation(
            "No valid lines found. Expected format: German - English - Bengali".to_string(),
        ));
    }

    let count = vocab::insert_batch(&state.pool, auth_user.user_id, &entries).await?;

    tracing::info!(
        user_id = %auth_user.user_id,
        count,
        "Vocabulary batch uploaded"
    );

    Ok((StatusCode::CREATED, Json(UploadResponse { count })))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    section: Option<String>,
}

async fn list(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<VocabEntry>>, ApiError> {
    let entries =
        vocab::list_for_user(&state.pool, auth_user.user_id, params.section.as_deref()).await?;

    Ok(Json(entries))
}
