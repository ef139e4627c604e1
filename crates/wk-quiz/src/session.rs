//! Ephemeral quiz session state machine.
//!
//! A session runs `Selecting -> AwaitingAnswer -> (Selecting | Completed)`
//! for a fixed number of questions in one mode. Sessions are never persisted;
//! abandoning one loses nothing but the session itself, since every answer is
//! recorded against the item counters as it happens.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::{QuizItem, QuizMode};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session length must be at least 1")]
    ZeroLength,
    #[error("a question is already awaiting an answer")]
    AlreadyAwaitingAnswer,
    #[error("no question is awaiting an answer")]
    NotAwaitingAnswer,
    #[error("session is already completed")]
    AlreadyCompleted,
}

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Ready for the next question to be selected.
    Selecting,
    /// A question for `entry_id` is on screen, waiting for the user.
    AwaitingAnswer { entry_id: Uuid },
    /// Target length reached; terminal.
    Completed,
}

/// Final report emitted when the session completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub total: u32,
    pub correct: u32,
    pub score_percent: f64,
    pub completed_at: DateTime<Utc>,
}

/// A fixed-length run of quiz questions in a single mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    mode: QuizMode,
    target_len: u32,
    position: u32,
    correct: u32,
    presented: HashSet<Uuid>,
    phase: SessionPhase,
}

impl QuizSession {
    /// Start a session of `target_len` questions. Mode and length are fixed
    /// for the session's lifetime.
    pub fn new(mode: QuizMode, target_len: u32) -> Result<Self, SessionError> {
        if target_len == 0 {
            return Err(SessionError::ZeroLength);
        }
        Ok(Self {
            mode,
            target_len,
            position: 0,
            correct: 0,
            presented: HashSet::new(),
            phase: SessionPhase::Selecting,
        })
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Questions answered so far.
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// The items eligible for the next draw: everything not yet shown in this
    /// session. Repeat avoidance is best-effort only; once every item has been
    /// shown the full slice is eligible again.
    pub fn candidates(&self, items: &[QuizItem]) -> Vec<QuizItem> {
        let unseen: Vec<QuizItem> = items
            .iter()
            .filter(|item| !self.presented.contains(&item.id))
            .cloned()
            .collect();
        if unseen.is_empty() {
            items.to_vec()
        } else {
            unseen
        }
    }

    /// Record that a question/card for `entry_id` is now on screen:
    /// `Selecting -> AwaitingAnswer`.
    pub fn present(&mut self, entry_id: Uuid) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Selecting => {
                self.presented.insert(entry_id);
                self.phase = SessionPhase::AwaitingAnswer { entry_id };
                Ok(())
            }
            SessionPhase::AwaitingAnswer { .. } => Err(SessionError::AlreadyAwaitingAnswer),
            SessionPhase::Completed => Err(SessionError::AlreadyCompleted),
        }
    }

    /// Score the on-screen question. Exactly one outcome is recorded per
    /// presented question; the session then loops back to `Selecting` or, at
    /// the target length, completes and returns the summary.
    pub fn score(&mut self, success: bool) -> Result<Option<SessionSummary>, SessionError> {
        match self.phase {
            SessionPhase::AwaitingAnswer { .. } => {}
            SessionPhase::Selecting => return Err(SessionError::NotAwaitingAnswer),
            SessionPhase::Completed => return Err(SessionError::AlreadyCompleted),
        }

        self.position += 1;
        if success {
            self.correct += 1;
        }

        if self.position < self.target_len {
            self.phase = SessionPhase::Selecting;
            Ok(None)
        } else {
            self.phase = SessionPhase::Completed;
            Ok(Some(SessionSummary {
                total: self.target_len,
                correct: self.correct,
                score_percent: (f64::from(self.correct) / f64::from(self.target_len) * 10_000.0)
                    .round()
                    / 100.0,
                completed_at: Utc::now(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn items(n: usize) -> Vec<QuizItem> {
        (0..n)
            .map(|i| {
                QuizItem::new(
                    Uuid::new_v4(),
                    format!("Wort{i}"),
                    format!("word{i}"),
                    format!("শব্দ{i}"),
                )
            })
            .collect()
    }

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(
            QuizSession::new(QuizMode::Choice, 0).unwrap_err(),
            SessionError::ZeroLength
        );
    }

    #[test]
    fn test_full_run_produces_summary() {
        let pool = items(5);
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::new(QuizMode::Choice, 3).unwrap();

        let mut summary = None;
        for round in 0..3 {
            let candidates = session.candidates(&pool);
            let question = selection::next_choice_question(&candidates, &mut rng).unwrap();
            session.present(question.entry_id).unwrap();
            summary = session.score(round % 2 == 0).unwrap();
        }

        let summary = summary.expect("third answer completes the session");
        assert_eq!(summary.total, 3);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.score_percent, 66.67);
        assert!(session.is_completed());
    }

    #[test]
    fn test_intermediate_scores_return_none() {
        let mut session = QuizSession::new(QuizMode::Swipe, 2).unwrap();
        session.present(Uuid::new_v4()).unwrap();
        assert_eq!(session.score(true).unwrap(), None);
        assert_eq!(session.position(), 1);
        assert_eq!(*session.phase(), SessionPhase::Selecting);
    }

    #[test]
    fn test_no_double_scoring() {
        let mut session = QuizSession::new(QuizMode::Choice, 2).unwrap();
        session.present(Uuid::new_v4()).unwrap();
        session.score(true).unwrap();
        assert_eq!(session.score(true).unwrap_err(), SessionError::NotAwaitingAnswer);
    }

    #[test]
    fn test_no_double_presentation() {
        let mut session = QuizSession::new(QuizMode::Choice, 2).unwrap();
        session.present(Uuid::new_v4()).unwrap();
        assert_eq!(
            session.present(Uuid::new_v4()).unwrap_err(),
            SessionError::AlreadyAwaitingAnswer
        );
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut session = QuizSession::new(QuizMode::Choice, 1).unwrap();
        session.present(Uuid::new_v4()).unwrap();
        assert!(session.score(false).unwrap().is_some());

        assert_eq!(
            session.present(Uuid::new_v4()).unwrap_err(),
            SessionError::AlreadyCompleted
        );
        assert_eq!(session.score(true).unwrap_err(), SessionError::AlreadyCompleted);
    }

    #[test]
    fn test_candidates_avoid_repeats_best_effort() {
        let pool = items(3);
        let mut session = QuizSession::new(QuizMode::Swipe, 5).unwrap();

        session.present(pool[0].id).unwrap();
        session.score(true).unwrap();

        let remaining = session.candidates(&pool);
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|item| item.id != pool[0].id));

        // Exhaust the pool; candidates falls back to the full slice.
        session.present(pool[1].id).unwrap();
        session.score(true).unwrap();
        session.present(pool[2].id).unwrap();
        session.score(false).unwrap();
        assert_eq!(session.candidates(&pool).len(), 3);
    }
}
