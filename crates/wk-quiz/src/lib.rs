//! Quiz engine for Wortkiste
//!
//! This crate provides the adaptive question/card selection algorithm, the
//! per-item progress counter arithmetic, aggregate statistics, and the
//! ephemeral quiz session state machine. It performs no I/O: callers load
//! vocabulary items, hand them to these functions, and persist the resulting
//! counter deltas themselves.

pub mod progress;
pub mod selection;
pub mod session;
pub mod stats;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two quiz modes.
///
/// * `Choice` - multiple-choice recall: the user picks the translation of a
///   German word out of four options.
/// * `Swipe` - known/unknown review drill: the card reveals both translations
///   and the user marks whether they knew the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    Choice,
    Swipe,
}

/// Which translation a multiple-choice question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskedLanguage {
    English,
    Bengali,
}

impl AskedLanguage {
    /// The translation of `item` in this language.
    pub fn translation<'a>(&self, item: &'a QuizItem) -> &'a str {
        match self {
            Self::English => &item.english,
            Self::Bengali => &item.bengali,
        }
    }
}

/// A vocabulary item as the quiz engine sees it: the word triple plus the
/// progress counters the selection and statistics functions read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: Uuid,
    pub german: String,
    pub english: String,
    pub bengali: String,
    pub choice_attempts: i32,
    pub choice_correct: i32,
    pub choice_mistakes: i32,
    pub swipe_attempts: i32,
    pub swipe_known: i32,
    pub swipe_unknown: i32,
    pub practice_count: i32,
    pub last_practiced_at: Option<DateTime<Utc>>,
}

impl QuizItem {
    /// A fresh item with the given words and all counters at zero.
    pub fn new(
        id: Uuid,
        german: impl Into<String>,
        english: impl Into<String>,
        bengali: impl Into<String>,
    ) -> Self {
        Self {
            id,
            german: german.into(),
            english: english.into(),
            bengali: bengali.into(),
            choice_attempts: 0,
            choice_correct: 0,
            choice_mistakes: 0,
            swipe_attempts: 0,
            swipe_known: 0,
            swipe_unknown: 0,
            practice_count: 0,
            last_practiced_at: None,
        }
    }

    /// Whether the counter invariants hold:
    /// `choice_attempts = choice_correct + choice_mistakes`,
    /// `swipe_attempts = swipe_known + swipe_unknown`, and
    /// `practice_count = choice_attempts + swipe_attempts`.
    pub fn counters_consistent(&self) -> bool {
        self.choice_attempts == self.choice_correct + self.choice_mistakes
            && self.swipe_attempts == self.swipe_known + self.swipe_unknown
            && self.practice_count == self.choice_attempts + self.swipe_attempts
    }

    /// Combined cross-mode mistake figure used for the "most mistaken words"
    /// ranking.
    pub fn combined_mistakes(&self) -> i32 {
        self.choice_mistakes + self.swipe_unknown
    }
}
