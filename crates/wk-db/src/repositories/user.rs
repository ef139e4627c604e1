use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{UserCredentials, UserProfile};

pub async fn create<'e, E>(
    executor: E,
    username: &str,
    password_hash: &str,
) -> Result<Uuid, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}

pub async fn find_credentials_by_username<'e, E>(
    executor: E,
    username: &str,
) -> Result<Option<UserCredentials>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(executor)
    .await
}

pub async fn find_profile_by_id<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, username, created_at
            FROM users
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}
