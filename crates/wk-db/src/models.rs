use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One vocabulary entry: a German word, its English and Bengali translations,
/// and the per-mode progress counters.
///
/// Counter invariants (hold after every committed update):
/// `choice_attempts = choice_correct + choice_mistakes`,
/// `swipe_attempts = swipe_known + swipe_unknown`,
/// `practice_count = choice_attempts + swipe_attempts`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VocabEntry {
    pub id: Uuid,
    /// Owning user (all queries are scoped to one user).
    pub user_id: Uuid,
    /// Optional free-text grouping label assigned at upload time.
    pub section: Option<String>,
    pub german: String,
    pub english: String,
    pub bengali: String,

    // Mode A (multiple choice) counters
    pub choice_attempts: i32,
    pub choice_correct: i32,
    pub choice_mistakes: i32,

    // Mode B (swipe) counters
    pub swipe_attempts: i32,
    pub swipe_known: i32,
    pub swipe_unknown: i32,

    /// Sum of attempts across both modes.
    pub practice_count: i32,
    pub last_practiced_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Word triple parsed from one upload line, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVocabEntry {
    pub german: String,
    pub english: String,
    pub bengali: String,
    pub section: Option<String>,
}

/// Credentials row used by login.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// Public profile row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
