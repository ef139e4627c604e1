use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

use super::to_quiz_item;
use crate::{ApiState, auth::AuthUser, error::ApiError, normalization};
use wk_db::{models::VocabEntry, repositories::vocab};
use wk_quiz::{AskedLanguage, QuizItem, selection};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/quiz/next", get(next_question))
        .route("/quiz/next-card", get(next_card))
        .route("/quiz/answer", post(answer))
        .route("/quiz/mark-known", post(mark_known))
        .route("/quiz/mark-unknown", post(mark_unknown))
}

#[derive(Debug, Deserialize)]
struct QuizParams {
    section: Option<String>,
}

async fn load_items(
    state: &ApiState,
    user_id: Uuid,
    section: Option<&str>,
) -> Result<(Vec<VocabEntry>, Vec<QuizItem>), ApiError> {
    let entries = vocab::list_for_user(&state.pool, user_id, section).await?;
    let items = entries.iter().map(to_quiz_item).collect();
    Ok((entries, items))
}

async fn next_question(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Query(params): Query<QuizParams>,
) -> Result<Json<selection::ChoiceQuestion>, ApiError> {
    let (_, items) = load_items(&state, auth_user.user_id, params.section.as_deref()).await?;

    // ThreadRng is !Send, keep it out of scope across awaits
    let question = {
        let mut rng = rand::thread_rng();
        selection::next_choice_question(&items, &mut rng)?
    };

    Ok(Json(question))
}

async fn next_card(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Query(params): Query<QuizParams>,
) -> Result<Json<VocabEntry>, ApiError> {
    let (entries, items) = load_items(&state, auth_user.user_id, params.section.as_deref()).await?;

    let selected_id = {
        let mut rng = rand::thread_rng();
        selection::next_swipe_card(&items, &mut rng)?.id
    };

    let entry = entries
        .into_iter()
        .find(|e| e.id == selected_id)
        .ok_or_else(|| ApiError::NotFound("Vocabulary entry not found".to_string()))?;

    Ok(Json(entry))
}

#[derive(Debug, Deserialize)]
struct AnswerRequest {
    entry_id: Uuid,
    answer: String,
    asked_language: AskedLanguage,
}

#[derive(Debug, Serialize)]
struct AnswerResponse {
    is_correct: bool,
    correct_answer: String,
    entry: VocabEntry,
}

/// Grade a typed or picked answer and record the outcome.
async fn answer(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    if payload.answer.trim().is_empty() {
        return Err(ApiError::Validation("Answer is required".to_string()));
    }

    let entry = vocab::find_for_user(&state.pool, payload.entry_id, auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vocabulary entry not found".to_string()))?;

    let correct_answer = match payload.asked_language {
        AskedLanguage::English => entry.english.clone(),
        AskedLanguage::Bengali => entry.bengali.clone(),
    };
    let is_correct = normalization::answers_match(&payload.answer, &correct_answer);

    let entry = vocab::record_choice_outcome(
        &state.pool,
        payload.entry_id,
        auth_user.user_id,
        is_correct,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Vocabulary entry not found".to_string()))?;

    Ok(Json(AnswerResponse {
        is_correct,
        correct_answer,
        entry,
    }))
}

#[derive(Debug, Deserialize)]
struct MarkRequest {
    entry_id: Uuid,
}

async fn mark_known(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(payload): Json<MarkRequest>,
) -> Result<Json<VocabEntry>, ApiError> {
    record_swipe(&state, auth_user.user_id, payload.entry_id, true).await
}

async fn mark_unknown(
    auth_user: AuthUser,
    State(state): State<ApiState>,
    Json(payload): Json<MarkRequest>,
) -> Result<Json<VocabEntry>, ApiError> {
    record_swipe(&state, auth_user.user_id, payload.entry_id, false).await
}

async fn record_swipe(
    state: &ApiState,
    user_id: Uuid,
    entry_id: Uuid,
    known: bool,
) -> Result<Json<VocabEntry>, ApiError> {
    let entry = vocab::record_swipe_outcome(&state.pool, entry_id, user_id, known)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vocabulary entry not found".to_string()))?;

    Ok(Json(entry))
}
