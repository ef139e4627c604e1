use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{NewVocabEntry, VocabEntry};

const ENTRY_COLUMNS: &str = r#"
    id, user_id, section, german, english, bengali,
    choice_attempts, choice_correct, choice_mistakes,
    swipe_attempts, swipe_known, swipe_unknown,
    practice_count, last_practiced_at, created_at, updated_at
"#;

/// Bulk-insert one upload batch for a user. Returns the number of rows created.
pub async fn insert_batch<'e, E>(
    executor: E,
    user_id: Uuid,
    entries: &[NewVocabEntry],
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    if entries.is_empty() {
        return Ok(0);
    }

    let german: Vec<String> = entries.iter().map(|e| e.german.clone()).collect();
    let english: Vec<String> = entries.iter().map(|e| e.english.clone()).collect();
    let bengali: Vec<String> = entries.iter().map(|e| e.bengali.clone()).collect();
    let section: Vec<Option<String>> = entries.iter().map(|e| e.section.clone()).collect();

    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO vocab_entries (user_id, german, english, bengali, section)
            SELECT $1, german, english, bengali, section
            FROM UNNEST($2::text[], $3::text[], $4::text[], $5::text[])
                AS t(german, english, bengali, section)
        "#,
    )
    .bind(user_id)
    .bind(&german)
    .bind(&english)
    .bind(&bengali)
    .bind(&section)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// All entries of a user, oldest first, optionally restricted to one section.
pub async fn list_for_user<'e, E>(
    executor: E,
    user_id: Uuid,
    section: Option<&str>,
) -> Result<Vec<VocabEntry>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let query = format!(
        // language=PostgreSQL
        r#"
            SELECT {ENTRY_COLUMNS}
            FROM vocab_entries
            WHERE user_id = $1 AND ($2::text IS NULL OR section = $2)
            ORDER BY created_at
        "#
    );
    sqlx::query_as(&query)
        .bind(user_id)
        .bind(section)
        .fetch_all(executor)
        .await
}

/// Look up one entry, scoped to its owner. `None` means a stale or foreign id.
pub async fn find_for_user<'e, E>(
    executor: E,
    entry_id: Uuid,
    user_id: Uuid,
) -> Result<Option<VocabEntry>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let query = format!(
        // language=PostgreSQL
        r#"
            SELECT {ENTRY_COLUMNS}
            FROM vocab_entries
            WHERE id = $1 AND user_id = $2
        "#
    );
    sqlx::query_as(&query)
        .bind(entry_id)
        .bind(user_id)
        .fetch_optional(executor)
        .await
}

/// Record a mode-A (multiple choice) answer as a single atomic increment.
///
/// The increments happen inside one UPDATE so concurrent sessions cannot lose
/// updates; the counter invariants hold in the returned row.
pub async fn record_choice_outcome<'e, E>(
    executor: E,
    entry_id: Uuid,
    user_id: Uuid,
    correct: bool,
) -> Result<Option<VocabEntry>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let query = format!(
        // language=PostgreSQL
        r#"
            UPDATE vocab_entries
            SET choice_attempts = choice_attempts + 1,
                choice_correct = choice_correct + CASE WHEN $3 THEN 1 ELSE 0 END,
                choice_mistakes = choice_mistakes + CASE WHEN $3 THEN 0 ELSE 1 END,
                practice_count = practice_count + 1,
                last_practiced_at = NOW(),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {ENTRY_COLUMNS}
        "#
    );
    sqlx::query_as(&query)
        .bind(entry_id)
        .bind(user_id)
        .bind(correct)
        .fetch_optional(executor)
        .await
}

/// Record a mode-B (swipe) known/unknown mark as a single atomic increment.
pub async fn record_swipe_outcome<'e, E>(
    executor: E,
    entry_id: Uuid,
    user_id: Uuid,
    known: bool,
) -> Result<Option<VocabEntry>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let query = format!(
        // language=PostgreSQL
        r#"
            UPDATE vocab_entries
            SET swipe_attempts = swipe_attempts + 1,
                swipe_known = swipe_known + CASE WHEN $3 THEN 1 ELSE 0 END,
                swipe_unknown = swipe_unknown + CASE WHEN $3 THEN 0 ELSE 1 END,
                practice_count = practice_count + 1,
                last_practiced_at = NOW(),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {ENTRY_COLUMNS}
        "#
    );
    sqlx::query_as(&query)
        .bind(entry_id)
        .bind(user_id)
        .bind(known)
        .fetch_optional(executor)
        .await
}
