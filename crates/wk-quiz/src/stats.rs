//! Aggregate statistics over a user's vocabulary.
//!
//! [`compute_stats`] is a pure function of the item slice: calling it twice
//! without mutating the items yields identical output, and zero denominators
//! report 0 rather than NaN.

use serde::Serialize;

use crate::QuizItem;

/// Length of the "most mistaken words" ranking.
pub const MOST_MISTAKEN_LIMIT: usize = 10;

/// Cross-mode summary of a user's progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_entries: usize,

    // Mode A (multiple choice)
    pub choice_attempts: i64,
    pub choice_correct: i64,
    pub choice_mistakes: i64,
    pub entries_with_choice_mistakes: usize,
    /// `choice_correct / choice_attempts * 100`, 2 decimals, 0 when unattempted.
    pub success_rate_choice: f64,

    // Mode B (swipe)
    pub swipe_attempts: i64,
    pub swipe_known: i64,
    pub swipe_unknown: i64,
    pub entries_with_swipe_unknown: usize,
    /// `swipe_known / swipe_attempts * 100`, 2 decimals, 0 when unattempted.
    pub success_rate_swipe: f64,

    // General
    pub practice_count: i64,
    pub average_mistakes_choice: f64,
    pub average_unknown_swipe: f64,
    /// Top [`MOST_MISTAKEN_LIMIT`] words by combined mistakes, descending.
    pub most_mistaken: Vec<MistakenWord>,
}

/// One entry of the "most mistaken words" ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MistakenWord {
    pub german: String,
    pub english: String,
    pub bengali: String,
    /// `choice_mistakes + swipe_unknown`.
    pub combined_mistakes: i32,
}

/// Compute the aggregate statistics for a user's full item set.
pub fn compute_stats(items: &[QuizItem]) -> StatsSummary {
    let choice_attempts: i64 = items.iter().map(|i| i64::from(i.choice_attempts)).sum();
    let choice_correct: i64 = items.iter().map(|i| i64::from(i.choice_correct)).sum();
    let choice_mistakes: i64 = items.iter().map(|i| i64::from(i.choice_mistakes)).sum();
    let swipe_attempts: i64 = items.iter().map(|i| i64::from(i.swipe_attempts)).sum();
    let swipe_known: i64 = items.iter().map(|i| i64::from(i.swipe_known)).sum();
    let swipe_unknown: i64 = items.iter().map(|i| i64::from(i.swipe_unknown)).sum();
    let practice_count: i64 = items.iter().map(|i| i64::from(i.practice_count)).sum();

    StatsSummary {
        total_entries: items.len(),
        choice_attempts,
        choice_correct,
        choice_mistakes,
        entries_with_choice_mistakes: items.iter().filter(|i| i.choice_mistakes > 0).count(),
        success_rate_choice: percentage(choice_correct, choice_attempts),
        swipe_attempts,
        swipe_known,
        swipe_unknown,
        entries_with_swipe_unknown: items.iter().filter(|i| i.swipe_unknown > 0).count(),
        success_rate_swipe: percentage(swipe_known, swipe_attempts),
        practice_count,
        average_mistakes_choice: average(choice_mistakes, items.len()),
        average_unknown_swipe: average(swipe_unknown, items.len()),
        most_mistaken: most_mistaken(items),
    }
}

/// Words with at least one combined mistake, most mistaken first, capped at
/// [`MOST_MISTAKEN_LIMIT`]. Ties are broken arbitrarily.
pub fn most_mistaken(items: &[QuizItem]) -> Vec<MistakenWord> {
    let mut ranked: Vec<&QuizItem> = items
        .iter()
        .filter(|i| i.combined_mistakes() > 0)
        .collect();
    ranked.sort_by(|a, b| b.combined_mistakes().cmp(&a.combined_mistakes()));
    ranked
        .into_iter()
        .take(MOST_MISTAKEN_LIMIT)
        .map(|i| MistakenWord {
            german: i.german.clone(),
            english: i.english.clone(),
            bengali: i.bengali.clone(),
            combined_mistakes: i.combined_mistakes(),
        })
        .collect()
}

/// `numerator / denominator * 100` rounded to 2 decimals, 0 for an empty
/// denominator.
fn percentage(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        round2(numerator as f64 / denominator as f64 * 100.0)
    }
}

fn average(total: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        round2(total as f64 / count as f64)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
