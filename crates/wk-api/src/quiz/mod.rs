pub mod routes;

pub use routes::routes;

use wk_db::models::VocabEntry;
use wk_quiz::QuizItem;

/// Project a stored entry onto the quiz engine's item type.
pub(crate) fn to_quiz_item(entry: &VocabEntry) -> QuizItem {
    QuizItem {
        id: entry.id,
        german: entry.german.clone(),
        english: entry.english.clone(),
        bengali: entry.bengali.clone(),
        choice_attempts: entry.choice_attempts,
        choice_correct: entry.choice_correct,
        choice_mistakes: entry.choice_mistakes,
        swipe_attempts: entry.swipe_attempts,
        swipe_known: entry.swipe_known,
        swipe_unknown: entry.swipe_unknown,
        practice_count: entry.practice_count,
        last_practiced_at: entry.last_practiced_at,
    }
}
