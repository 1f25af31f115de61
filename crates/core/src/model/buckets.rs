use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::model::Flashcard;

/// Cards sharing one review interval.
pub type BucketSet = BTreeSet<Flashcard>;

//
// ─── BUCKET MAP ────────────────────────────────────────────────────────────────
//

/// Sparse bucket form: only buckets that were explicitly created are present.
///
/// Each bucket's set sits behind an `Arc`, so cloning a map is cheap and the
/// clone shares every set with the original until one of them writes to it.
/// A bucket whose set is empty still exists and still counts toward [`len`].
///
/// Every card is expected to live in exactly one bucket. The map does not
/// police this on insertion; [`crate::scheduler::update`] preserves it.
///
/// [`len`]: BucketMap::len
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketMap {
    buckets: BTreeMap<usize, Arc<BucketSet>>,
}

impl BucketMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buckets present, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn get(&self, bucket: usize) -> Option<&BucketSet> {
        self.buckets.get(&bucket).map(|cards| &**cards)
    }

    /// The shared handle for a bucket's set.
    #[must_use]
    pub fn get_shared(&self, bucket: usize) -> Option<&Arc<BucketSet>> {
        self.buckets.get(&bucket)
    }

    /// Replace a bucket's set, returning the previous one.
    pub fn insert(&mut self, bucket: usize, cards: BucketSet) -> Option<Arc<BucketSet>> {
        self.buckets.insert(bucket, Arc::new(cards))
    }

    /// Add a card to a bucket, creating the bucket if needed.
    ///
    /// Returns `false` if the bucket already held the card.
    pub fn insert_card(&mut self, bucket: usize, card: Flashcard) -> bool {
        self.bucket_mut(bucket).insert(card)
    }

    /// Occupied and empty buckets in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BucketSet)> + '_ {
        self.buckets.iter().map(|(k, v)| (*k, &**v))
    }

    /// Highest bucket index present, if any.
    #[must_use]
    pub fn max_bucket(&self) -> Option<usize> {
        self.buckets.keys().next_back().copied()
    }

    /// Lowest-indexed bucket holding `card`.
    #[must_use]
    pub fn find_card(&self, card: &Flashcard) -> Option<usize> {
        self.iter()
            .find_map(|(bucket, cards)| cards.contains(card).then_some(bucket))
    }

    /// Card count summed over all buckets.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.buckets.values().map(|cards| cards.len()).sum()
    }

    /// Writable view of one bucket. Clones the set first if it is shared.
    pub(crate) fn bucket_mut(&mut self, bucket: usize) -> &mut BucketSet {
        Arc::make_mut(self.buckets.entry(bucket).or_default())
    }
}

impl FromIterator<(usize, BucketSet)> for BucketMap {
    fn from_iter<I: IntoIterator<Item = (usize, BucketSet)>>(iter: I) -> Self {
        Self {
            buckets: iter
                .into_iter()
                .map(|(bucket, cards)| (bucket, Arc::new(cards)))
                .collect(),
        }
    }
}

//
// ─── BUCKET VIEWS ──────────────────────────────────────────────────────────────
//

/// Anything that can be read as `(bucket index, cards)` pairs.
///
/// Implemented for the sparse [`BucketMap`] and for the dense array-of-sets
/// form (slices or vectors of sets, shared or owned).
pub trait Buckets {
    fn buckets(&self) -> impl Iterator<Item = (usize, &BucketSet)> + '_;
}

impl Buckets for BucketMap {
    fn buckets(&self) -> impl Iterator<Item = (usize, &BucketSet)> + '_ {
        self.iter()
    }
}

impl<S: Borrow<BucketSet>> Buckets for [S] {
    fn buckets(&self) -> impl Iterator<Item = (usize, &BucketSet)> + '_ {
        self.iter()
            .map(<S as Borrow<BucketSet>>::borrow)
            .enumerate()
    }
}

impl<S: Borrow<BucketSet>> Buckets for Vec<S> {
    fn buckets(&self) -> impl Iterator<Item = (usize, &BucketSet)> + '_ {
        self.as_slice().buckets()
    }
}

/// Lowest and highest bucket holding at least one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketRange {
    pub min_bucket: usize,
    pub max_bucket: usize,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
