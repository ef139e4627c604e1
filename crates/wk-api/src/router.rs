use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{auth, quiz, state::ApiState, stats, vocab};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .merge(auth::routes())
        .merge(vocab::routes())
        .merge(quiz::routes())
        .merge(stats::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
