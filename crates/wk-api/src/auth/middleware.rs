use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use sqlx::types::Uuid;

use super::jwt::{AUTH_COOKIE_NAME, verify_jwt_token};
use crate::{error::ApiError, state::AuthConfig};

/// Authenticated user extractor
///
/// Use this in route handlers to ensure the user is authenticated.
/// It validates the JWT from the encrypted auth cookie.
///
/// # Example
/// ```
/// use axum::extract::State;
/// use wk_api::{ApiState, auth::AuthUser, error::ApiError};
///
/// async fn protected_route(
///     auth_user: AuthUser,
///     State(state): State<ApiState>,
/// ) -> Result<(), ApiError> {
///     // auth_user.user_id and auth_user.username are available
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    Key: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_config = AuthConfig::from_ref(state);

        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Auth("Failed to read cookies".to_string()))?;

        let token = jar
            .get(AUTH_COOKIE_NAME)
            .ok_or(ApiError::Auth("Not authenticated".to_string()))?
            .value()
            .to_owned();

        let claims = verify_jwt_token(&token, &auth_config.jwt_secret)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Auth("Invalid user ID in token".to_string()))?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
        })
    }
}
