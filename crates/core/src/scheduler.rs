//! Modified-Leitner scheduling over bucketed flashcards.
//!
//! Bucket `i` is reviewed every `i + 1` days: bucket 0 daily, bucket 1 every
//! other day, and so on. A card answered `Easy` moves up one bucket, `Hard`
//! moves it down one, `Neutral` leaves it in place.

use std::borrow::Borrow;
use std::sync::Arc;

use log::{debug, trace, warn};
use thiserror::Error;

use crate::model::{AnswerDifficulty, BucketMap, BucketRange, BucketSet, Buckets, Flashcard};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BucketError {
    #[error("card not found in any bucket")]
    CardNotFound,
}

//
// ─── CONVERSION ────────────────────────────────────────────────────────────────
//

/// Convert the sparse form into the dense array-of-sets form.
///
/// Position `i` of the result is bucket `i`. Buckets the map does not have
/// become empty sets; buckets it does have are shared, not copied.
///
/// # Panics
///
/// The result holds `max_bucket + 1` slots, so a key near `usize::MAX`
/// exceeds the allocator's capacity and panics. Keys are expected to stay
/// small; [`bucket_range`] and [`update`] work on the sparse form without
/// this limit.
///
/// # Examples
///
/// ```
/// # use leitner_core::model::{BucketMap, Flashcard};
/// # use leitner_core::scheduler::to_bucket_sets;
/// let mut map = BucketMap::new();
/// map.insert_card(2, Flashcard::new("cat", "a small pet"));
///
/// let sets = to_bucket_sets(&map);
/// assert_eq!(sets.len(), 3);
/// assert!(sets[0].is_empty() && sets[1].is_empty());
/// assert_eq!(sets[2].len(), 1);
/// ```
#[must_use]
pub fn to_bucket_sets(buckets: &BucketMap) -> Vec<Arc<BucketSet>> {
    let Some(max_bucket) = buckets.max_bucket() else {
        return Vec::new();
    };

    (0..=max_bucket)
        .map(|bucket| buckets.get_shared(bucket).cloned().unwrap_or_default())
        .collect()
}

//
// ─── RANGE ─────────────────────────────────────────────────────────────────────
//

/// Lowest and highest bucket holding at least one card, as a rough measure
/// of progress.
///
/// Works on either bucket form. Returns `None` when every bucket is empty or
/// there are no buckets at all.
#[must_use]
pub fn bucket_range<B: Buckets + ?Sized>(buckets: &B) -> Option<BucketRange> {
    buckets
        .buckets()
        .filter(|(_, cards)| !cards.is_empty())
        .fold(None, |range, (bucket, _)| {
            Some(match range {
                None => BucketRange {
                    min_bucket: bucket,
                    max_bucket: bucket,
                },
                Some(BucketRange {
                    min_bucket,
                    max_bucket,
                }) => BucketRange {
                    min_bucket: min_bucket.min(bucket),
                    max_bucket: max_bucket.max(bucket),
                },
            })
        })
}

//
// ─── PRACTICE ──────────────────────────────────────────────────────────────────
//

/// Cards due on `day` (counting from 0).
///
/// The result is the union of every bucket `i` with `day % (i + 1) == 0`, so
/// day 0 selects everything.
///
/// # Examples
///
/// ```
/// # use leitner_core::model::{BucketSet, Flashcard};
/// # use leitner_core::scheduler::practice;
/// let fresh = Flashcard::new("cat", "a small pet");
/// let known = Flashcard::new("dog", "a loyal pet");
/// let buckets = vec![BucketSet::from([fresh.clone()]), BucketSet::from([known])];
///
/// assert_eq!(practice(&buckets, 0).len(), 2);
/// assert_eq!(practice(&buckets, 1), BucketSet::from([fresh]));
/// ```
#[must_use]
pub fn practice<S: Borrow<BucketSet>>(buckets: &[S], day: u64) -> BucketSet {
    let due: BucketSet = buckets
        .iter()
        .zip(1_u64..)
        .filter(|(_, interval)| day % interval == 0)
        .flat_map(|(cards, _)| <S as Borrow<BucketSet>>::borrow(cards).iter().cloned())
        .collect();

    trace!("day {day}: {} cards due across {} buckets", due.len(), buckets.len());
    due
}

//
// ─── UPDATE ────────────────────────────────────────────────────────────────────
//

/// Move `card` to the bucket its answer earns and return the new map.
///
/// - `Easy` promotes by one, capped at `buckets.len() - 1`. The cap counts
///   buckets, not indices, so no bucket beyond the map's size is ever created.
///   On a map with gaps this can place the card below where it started.
/// - `Hard` demotes by one, stopping at bucket 0.
/// - `Neutral` leaves the card where it is.
///
/// The input is left untouched. The returned map shares every bucket with it
/// except the source and destination, which get fresh sets. The source bucket
/// is kept even if the move leaves it empty.
///
/// # Errors
///
/// Returns `BucketError::CardNotFound` if no bucket holds `card`.
///
/// # Examples
///
/// ```
/// # use leitner_core::model::{AnswerDifficulty, BucketMap, BucketSet, Flashcard};
/// # use leitner_core::scheduler::update;
/// let card = Flashcard::new("cat", "a small pet");
/// let buckets: BucketMap = [(0, BucketSet::from([card.clone()])), (1, BucketSet::new())]
///     .into_iter()
///     .collect();
///
/// let next = update(&buckets, &card, AnswerDifficulty::Easy)?;
/// assert_eq!(next.find_card(&card), Some(1));
/// assert_eq!(buckets.find_card(&card), Some(0));
/// # Ok::<(), leitner_core::scheduler::BucketError>(())
/// ```
pub fn update(
    buckets: &BucketMap,
    card: &Flashcard,
    difficulty: AnswerDifficulty,
) -> Result<BucketMap, BucketError> {
    let current = buckets.find_card(card).ok_or(BucketError::CardNotFound)?;

    let target = match difficulty {
        AnswerDifficulty::Easy => current
            .saturating_add(1)
            .min(buckets.len().saturating_sub(1)),
        AnswerDifficulty::Hard => current.saturating_sub(1),
        AnswerDifficulty::Neutral => current,
    };

    if target < current && difficulty == AnswerDifficulty::Easy {
        warn!(
            "easy answer moved {:?} down from bucket {current} to {target}: map has only {} buckets",
            card.front(),
            buckets.len()
        );
    }

    let mut next = buckets.clone();
    if target != current {
        next.bucket_mut(current).remove(card);
        next.bucket_mut(target).insert(card.clone());
    }

    debug!(
        "{difficulty:?} answer for {:?}: bucket {current} -> {target}",
        card.front()
    );
    Ok(next)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
