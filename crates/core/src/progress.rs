//! Read-only learning statistics over a bucket map and its answer history.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;

use crate::model::{AnswerDifficulty, AnswerRecord, BucketMap, Flashcard, LeitnerSettings};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("answer history is empty")]
    EmptyHistory,
}

//
// ─── REPORT TYPES ──────────────────────────────────────────────────────────────
//

/// Answer counts per difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyBreakdown {
    pub easy: usize,
    pub hard: usize,
    pub neutral: usize,
}

impl DifficultyBreakdown {
    fn record(&mut self, difficulty: AnswerDifficulty) {
        match difficulty {
            AnswerDifficulty::Easy => self.easy += 1,
            AnswerDifficulty::Hard => self.hard += 1,
            AnswerDifficulty::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.easy + self.hard + self.neutral
    }
}

impl<'a> FromIterator<&'a AnswerRecord> for DifficultyBreakdown {
    fn from_iter<I: IntoIterator<Item = &'a AnswerRecord>>(iter: I) -> Self {
        let mut breakdown = Self::default();
        for record in iter {
            breakdown.record(record.difficulty);
        }
        breakdown
    }
}

/// A card and how many times it was answered `Hard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardCard {
    pub card: Flashcard,
    pub hard_answers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerStats {
    pub total_attempts: usize,
    pub breakdown: DifficultyBreakdown,
    /// Most often `Hard` first; ties in card order.
    pub hardest_cards: Vec<HardCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    /// Distinct cards across all buckets.
    pub total_cards: usize,
    /// Card count for every bucket in the map, empty ones included.
    pub bucket_distribution: BTreeMap<usize, usize>,
    /// Mean bucket index over all cards, `None` without cards.
    pub average_bucket: Option<f64>,
    pub answers: AnswerStats,
    /// Breakdown of the latest answers by `answered_at`.
    pub recent: DifficultyBreakdown,
}

//
// ─── COMPUTATION ───────────────────────────────────────────────────────────────
//

/// Summarize where the cards stand and how answering has gone.
///
/// `history` need not be sorted; the recent window is taken after a stable
/// sort on `answered_at`, so answers sharing a timestamp keep their input
/// order. Neither input is modified.
///
/// # Errors
///
/// Returns `ProgressError::EmptyHistory` if `history` is empty.
#[allow(clippy::cast_precision_loss)]
pub fn compute_progress(
    buckets: &BucketMap,
    history: &[AnswerRecord],
    settings: &LeitnerSettings,
) -> Result<ProgressReport, ProgressError> {
    if history.is_empty() {
        return Err(ProgressError::EmptyHistory);
    }

    let bucket_distribution: BTreeMap<usize, usize> = buckets
        .iter()
        .map(|(bucket, cards)| (bucket, cards.len()))
        .collect();

    let total_cards = buckets
        .iter()
        .flat_map(|(_, cards)| cards.iter())
        .collect::<BTreeSet<_>>()
        .len();

    let placements: usize = bucket_distribution.values().sum();
    let average_bucket = (placements > 0).then(|| {
        let weighted: f64 = bucket_distribution
            .iter()
            .map(|(bucket, count)| *bucket as f64 * *count as f64)
            .sum();
        weighted / placements as f64
    });

    let mut ordered: Vec<&AnswerRecord> = history.iter().collect();
    ordered.sort_by_key(|record| record.answered_at);
    let recent: DifficultyBreakdown = ordered
        .iter()
        .rev()
        .take(settings.recent_window())
        .copied()
        .collect();

    Ok(ProgressReport {
        total_cards,
        bucket_distribution,
        average_bucket,
        answers: AnswerStats {
            total_attempts: history.len(),
            breakdown: history.iter().collect(),
            hardest_cards: hardest_cards(history, settings.hardest_cards_limit()),
        },
        recent,
    })
}

fn hardest_cards(history: &[AnswerRecord], limit: usize) -> Vec<HardCard> {
    let mut counts: BTreeMap<&Flashcard, usize> = BTreeMap::new();
    for record in history {
        if record.difficulty == AnswerDifficulty::Hard {
            *counts.entry(&record.card).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&Flashcard, usize)> = counts.into_iter().collect();
    // BTreeMap order already breaks ties by card; the sort is stable.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(card, hard_answers)| HardCard {
            card: card.clone(),
            hard_answers,
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
