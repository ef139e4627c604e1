use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::PgPool;

use crate::{ApiConfig, config::Environment};

#[derive(Clone)]
pub struct ApiState {
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub bcrypt_cost: u32,
    pub frontend_url: String,
    pub cookie_key: Key,
    pub pool: PgPool,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        let cookie_key = Key::from(config.cookie_secret.as_bytes());

        Self {
            jwt_secret: config.jwt_secret,
            jwt_expiry_hours: config.jwt_expiry_hours,
            bcrypt_cost: config.bcrypt_cost,
            frontend_url: config.frontend_url,
            cookie_key,
            pool,
            environment: config.env,
        }
    }
}

/// The subset of state the auth extractor needs.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl FromRef<ApiState> for AuthConfig {
    fn from_ref(state: &ApiState) -> Self {
        AuthConfig {
            jwt_secret: state.jwt_secret.clone(),
        }
    }
}

impl FromRef<ApiState> for Key {
    fn from_ref(state: &ApiState) -> Self {
        state.cookie_key.clone()
    }
}
