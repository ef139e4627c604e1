use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{ApiState, auth::AuthUser, error::ApiError, quiz::to_quiz_item};
use wk_db::repositories::vocab;
use wk_quiz::stats::{self, MistakenWord, StatsSummary};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/quiz/stats", get(quiz_stats))
        .route("/stats", get(overview))
}

#[derive(Debug, Deserialize)]
struct StatsParams {
    section: Option<String>,
}

/// Full per-mode statistics, optionally restricted to one section.
async fn quiz_stats(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Query(params): Query<StatsParams>,
) -> Result<Json<StatsSummary>, ApiError> {
    let entries =
        vocab::list_for_user(&state.pool, auth_user.user_id, params.section.as_deref()).await?;
    let items: Vec<_> = entries.iter().map(to_quiz_item).collect();

    Ok(Json(stats::compute_stats(&items)))
}

#[derive(Debug, Serialize)]
struct OverviewResponse {
    total_entries: usize,
    total_mistakes: i64,
    most_mistaken: Vec<MistakenWord>,
}

/// Compact dashboard figures: vocabulary size, combined mistake total and
/// the most-mistaken ranking.
async fn overview(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let entries = vocab::list_for_user(&state.pool, auth_user.user_id, None).await?;
    let items: Vec<_> = entries.iter().map(to_quiz_item).collect();

    let total_mistakes = items
        .iter()
        .map(|i| i64::from(i.combined_mistakes()))
        .sum();

    Ok(Json(OverviewResponse {
        total_entries: items.len(),
        total_mistakes,
        most_mistaken: stats::most_mistaken(&items),
    }))
}
