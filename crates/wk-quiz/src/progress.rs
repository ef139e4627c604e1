//! Per-item progress counter arithmetic.
//!
//! An answer or swipe maps to a [`CounterDelta`] of pure increments. The
//! persistence layer applies the same delta as a single atomic SQL update;
//! [`apply`] is the in-memory equivalent used by sessions and tests.

use chrono::{DateTime, Utc};

use crate::{QuizItem, QuizMode};

/// The result of one quiz interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Mode A: the user picked an option; `correct` is whether it matched.
    Choice { correct: bool },
    /// Mode B: the user swiped; `known` is whether they knew the word.
    Swipe { known: bool },
}

impl AnswerOutcome {
    pub fn mode(&self) -> QuizMode {
        match self {
            Self::Choice { .. } => QuizMode::Choice,
            Self::Swipe { .. } => QuizMode::Swipe,
        }
    }

    /// Whether the interaction counts as a success (correct answer or known
    /// word).
    pub fn is_success(&self) -> bool {
        match *self {
            Self::Choice { correct } => correct,
            Self::Swipe { known } => known,
        }
    }

    /// The counter increments this outcome implies. Every outcome bumps the
    /// attempt counter of its mode and the overall practice count by one.
    pub fn delta(&self) -> CounterDelta {
        match *self {
            Self::Choice { correct } => CounterDelta {
                choice_attempts: 1,
                choice_correct: i32::from(correct),
                choice_mistakes: i32::from(!correct),
                practice_count: 1,
                ..CounterDelta::default()
            },
            Self::Swipe { known } => CounterDelta {
                swipe_attempts: 1,
                swipe_known: i32::from(known),
                swipe_unknown: i32::from(!known),
                practice_count: 1,
                ..CounterDelta::default()
            },
        }
    }
}

/// Increments to a vocabulary item's counters. All fields are non-negative;
/// counters only ever grow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterDelta {
    pub choice_attempts: i32,
    pub choice_correct: i32,
    pub choice_mistakes: i32,
    pub swipe_attempts: i32,
    pub swipe_known: i32,
    pub swipe_unknown: i32,
    pub practice_count: i32,
}

/// Apply an outcome to an in-memory item, stamping `last_practiced_at`.
pub fn apply(item: &mut QuizItem, outcome: AnswerOutcome, now: DateTime<Utc>) {
    let delta = outcome.delta();
    item.choice_attempts += delta.choice_attempts;
    item.choice_correct += delta.choice_correct;
    item.choice_mistakes += delta.choice_mistakes;
    item.swipe_attempts += delta.swipe_attempts;
    item.swipe_known += delta.swipe_known;
    item.swipe_unknown += delta.swipe_unknown;
    item.practice_count += delta.practice_count;
    item.last_practiced_at = Some(now);
    debug_assert!(item.counters_consistent());
}
