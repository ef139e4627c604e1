use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Cookie};
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;

use super::{jwt, middleware::AuthUser, validation};
use crate::{ApiState, error::ApiError, middleware::rate_limit};
use wk_db::repositories::user;

pub fn routes() -> Router<ApiState> {
    use crate::make_rate_limit_layer;

    // Credential routes get the strict limiter (brute-force surface)
    let credential_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .layer(make_rate_limit_layer!(
            rate_limit::AUTH_RATE_PER_SECOND,
            rate_limit::AUTH_BURST_SIZE
        ));

    let session_routes = Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(auth_me))
        .layer(make_rate_limit_layer!(
            rate_limit::GENERAL_RATE_PER_SECOND,
            rate_limit::GENERAL_BURST_SIZE
        ));

    Router::new().merge(credential_routes).merge(session_routes)
}

#[derive(Debug, Deserialize)]
struct CredentialsRequest {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
}

async fn register(
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(PrivateCookieJar, (StatusCode, Json<UserResponse>)), ApiError> {
    validation::validate_username(&payload.username)?;
    validation::validate_password(&payload.password)?;

    let password_hash = bcrypt::hash(&payload.password, state.bcrypt_cost)?;

    let user_id = user::create(&state.pool, &payload.username, &password_hash)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::Conflict("Username is already taken".to_string())
            }
            _ => ApiError::from(e),
        })?;

    tracing::info!(username = %payload.username, "User registered");

    let token = jwt::generate_jwt_token(
        user_id,
        payload.username.clone(),
        &state.jwt_secret,
        state.jwt_expiry_hours,
    )?;
    let cookie = jwt::create_auth_cookie(token, &state.environment, state.jwt_expiry_hours);
    let jar = jar.add(cookie);

    Ok((
        jar,
        (
            StatusCode::CREATED,
            Json(UserResponse {
                id: user_id,
                username: payload.username,
            }),
        ),
    ))
}

async fn login(
    State(state): State<ApiState>,
    jar: PrivateCookieJar,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(PrivateCookieJar, Json<UserResponse>), ApiError> {
    // One generic message for both unknown-user and wrong-password so the
    // endpoint cannot be used to enumerate usernames.
    let invalid = || ApiError::Auth("Invalid username or password".to_string());

    let credentials = user::find_credentials_by_username(&state.pool, &payload.username)
        .await?
        .ok_or_else(invalid)?;

    if !bcrypt::verify(&payload.password, &credentials.password_hash)? {
        return Err(invalid());
    }

    let token = jwt::generate_jwt_token(
        credentials.id,
        credentials.username.clone(),
        &state.jwt_secret,
        state.jwt_expiry_hours,
    )?;
    let cookie = jwt::create_auth_cookie(token, &state.environment, state.jwt_expiry_hours);
    let jar = jar.add(cookie);

    Ok((
        jar,
        Json(UserResponse {
            id: credentials.id,
            username: credentials.username,
        }),
    ))
}

async fn auth_me(
    auth_user: AuthUser,
    State(state): State<ApiState>,
) -> Result<Json<wk_db::models::UserProfile>, ApiError> {
    let profile = user::find_profile_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::Auth("User not found".to_string()))?;

    Ok(Json(profile))
}

async fn logout(jar: PrivateCookieJar) -> (PrivateCookieJar, Json<serde_json::Value>) {
    let auth_cookie = Cookie::build((jwt::AUTH_COOKIE_NAME, "")).path("/").build();
    let jar = jar.remove(auth_cookie);

    (
        jar,
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    )
}
