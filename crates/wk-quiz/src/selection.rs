//! Adaptive selection of the next question or card.
//!
//! Both modes use the same two-phase scheme: a deterministic stable sort on
//! real priority keys (with a per-call random key breaking ties), followed by
//! an explicit uniform draw from the qualifying slice. Randomness never lives
//! inside a comparator, so the ordering is always transitive.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::{AskedLanguage, QuizItem};

/// Share of the priority-sorted list that multiple-choice questions draw from.
/// The top of the list holds the most-mistaken and longest-unpracticed words.
pub const CHOICE_POOL_SHARE: f64 = 0.7;

/// Number of options in a multiple-choice question (one correct, three wrong).
pub const OPTION_COUNT: usize = 4;

const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Generic wrong answers used when the user's vocabulary is too small to
/// supply three real distractors.
const ENGLISH_FALLBACKS: &[&str] = &[
    "To walk", "To eat", "To sleep", "To read", "To write", "To speak",
];
const BENGALI_FALLBACKS: &[&str] = &["হাঁটা", "খাওয়া", "ঘুমানো", "পড়া", "লেখা", "বলা"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no vocabulary items available to select from")]
    EmptyPool,
}

/// A multiple-choice question ready to be shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceQuestion {
    pub entry_id: Uuid,
    pub german: String,
    pub asked_language: AskedLanguage,
    /// Exactly [`OPTION_COUNT`] shuffled answers, one of them correct.
    pub options: Vec<String>,
}

/// Pick the next multiple-choice question.
///
/// Priority order: `choice_mistakes` descending, then `last_practiced_at`
/// ascending with never-practiced items first, ties broken uniformly at
/// random. The question is drawn uniformly from the top
/// [`CHOICE_POOL_SHARE`] of that order, and the asked language is a coin
/// flip between English and Bengali.
pub fn next_choice_question(
    items: &[QuizItem],
    rng: &mut impl Rng,
) -> Result<ChoiceQuestion, SelectionError> {
    let sorted = prioritized(items, |item| item.choice_mistakes, rng);
    if sorted.is_empty() {
        return Err(SelectionError::EmptyPool);
    }

    let pool_len = choice_pool_len(sorted.len());
    let selected = sorted[rng.gen_range(0..pool_len)];

    let asked_language = if rng.gen_bool(0.5) {
        AskedLanguage::English
    } else {
        AskedLanguage::Bengali
    };
    let correct = asked_language.translation(selected).to_owned();
    let options = build_options(items, selected.id, asked_language, &correct, rng);

    Ok(ChoiceQuestion {
        entry_id: selected.id,
        german: selected.german.clone(),
        asked_language,
        options,
    })
}

/// Pick the next swipe card.
///
/// Priority order: `swipe_unknown` descending, then `last_practiced_at`
/// ascending with never-practiced items first, ties broken uniformly at
/// random. Unlike the multiple-choice mode the draw covers the ENTIRE sorted
/// set; this asymmetry is deliberate and keeps the swipe drill closer to a
/// plain shuffle.
pub fn next_swipe_card<'a>(
    items: &'a [QuizItem],
    rng: &mut impl Rng,
) -> Result<&'a QuizItem, SelectionError> {
    let sorted = prioritized(items, |item| item.swipe_unknown, rng);
    if sorted.is_empty() {
        return Err(SelectionError::EmptyPool);
    }
    Ok(sorted[rng.gen_range(0..sorted.len())])
}

/// Number of items eligible for a multiple-choice draw out of `n` sorted ones.
fn choice_pool_len(n: usize) -> usize {
    if n < 2 {
        n
    } else {
        (n as f64 * CHOICE_POOL_SHARE).ceil() as usize
    }
}

/// Stable priority sort with a pre-drawn random tiebreak key per item.
/// `None` in `last_practiced_at` sorts before any timestamp, so words never
/// practiced surface first among equal mistake counts.
fn prioritized<'a>(
    items: &'a [QuizItem],
    priority: impl Fn(&QuizItem) -> i32,
    rng: &mut impl Rng,
) -> Vec<&'a QuizItem> {
    let mut keyed: Vec<(&QuizItem, u64)> = items.iter().map(|item| (item, rng.r#gen())).collect();
    keyed.sort_by(|(a, ka), (b, kb)| {
        priority(b)
            .cmp(&priority(a))
            .then_with(|| a.last_practiced_at.cmp(&b.last_practiced_at))
            .then_with(|| ka.cmp(kb))
    });
    keyed.into_iter().map(|(item, _)| item).collect()
}

/// Assemble the shuffled option list: up to three real distractors sampled
/// without replacement from the other items, padded from the fallback list
/// when the vocabulary is too small. Neither a distractor nor a fallback may
/// equal the correct answer, and all options are pairwise distinct.
fn build_options(
    items: &[QuizItem],
    selected_id: Uuid,
    asked_language: AskedLanguage,
    correct: &str,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(correct.to_lowercase());

    let candidates: Vec<&str> = items
        .iter()
        .filter(|item| item.id != selected_id)
        .map(|item| asked_language.translation(item))
        .filter(|translation| seen.insert(translation.to_lowercase()))
        .collect();

    let mut options: Vec<String> = candidates
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|translation| (*translation).to_owned())
        .collect();

    if options.len() < DISTRACTOR_COUNT {
        let fallbacks = match asked_language {
            AskedLanguage::English => ENGLISH_FALLBACKS,
            AskedLanguage::Bengali => BENGALI_FALLBACKS,
        };
        for fallback in fallbacks {
            if options.len() == DISTRACTOR_COUNT {
                break;
            }
            if seen.insert(fallback.to_lowercase()) {
                options.push((*fallback).to_owned());
            }
        }
    }

    options.push(correct.to_owned());
    options.shuffle(rng);
    options
}
