use std::env;

use anyhow::Context;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub cookie_secret: String,
    pub frontend_url: String,
    pub bcrypt_cost: u32,
    pub port: u16,
    pub env: Environment,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let cookie_secret = env::var("COOKIE_SECRET").context("COOKIE_SECRET is not set")?;
        // axum-extra's private cookie jar derives its key from this value and
        // requires at least 64 bytes of material.
        if cookie_secret.len() < 64 {
            anyhow::bail!("COOKIE_SECRET must be at least 64 bytes long");
        }

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL is not set")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET is not set")?,
            jwt_expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
            cookie_secret,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            port,
            env,
        })
    }
}
