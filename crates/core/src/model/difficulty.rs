use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Flashcard;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("invalid answer difficulty value: {0}")]
    InvalidValue(u8),
}

//
// ─── ANSWER DIFFICULTY ────────────────────────────────────────────────────────
//

/// How well the learner recalled a card in one practice trial.
///
/// - `Hard`: recalled with difficulty (or not at all); the card moves down a bucket
/// - `Neutral`: no judgment either way; the card stays where it is
/// - `Easy`: recalled with no effort; the card moves up a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerDifficulty {
    Hard,
    Neutral,
    Easy,
}

impl AnswerDifficulty {
    /// Converts a numeric judgment (0-2) to an `AnswerDifficulty`.
    ///
    /// # Errors
    ///
    /// Returns `DifficultyError::InvalidValue` if the value is not in the range 0-2.
    pub fn from_u8(value: u8) -> Result<Self, DifficultyError> {
        match value {
            0 => Ok(Self::Hard),
            1 => Ok(Self::Neutral),
            2 => Ok(Self::Easy),
            _ => Err(DifficultyError::InvalidValue(value)),
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            AnswerDifficulty::Hard => 0,
            AnswerDifficulty::Neutral => 1,
            AnswerDifficulty::Easy => 2,
        }
    }
}

//
// ─── ANSWER RECORD ────────────────────────────────────────────────────────────
//

/// One entry of the answer history: which card, how it went, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub card: Flashcard,
    pub difficulty: AnswerDifficulty,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(card: Flashcard, difficulty: AnswerDifficulty, answered_at: DateTime<Utc>) -> Self {
        Self {
            card,
            difficulty,
            answered_at,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
