#![forbid(unsafe_code)]
//! Leitner-system flashcard scheduling.
//!
//! Cards live in numbered buckets; a higher bucket means a better-known card
//! and a longer review interval. The crate converts between the sparse and
//! dense bucket forms, picks the cards due on a given day, moves a card after
//! an answer, masks a card's prompt into a hint, and summarizes progress.
//! Every operation is a pure function over immutable snapshots.

pub mod error;
pub mod hint;
pub mod model;
pub mod progress;
pub mod scheduler;
pub mod time;

pub use error::Error;
pub use hint::{HintError, hint, hint_with};
pub use model::{
    AnswerDifficulty, AnswerRecord, BucketMap, BucketRange, BucketSet, Buckets, Flashcard,
    LeitnerSettings, LeitnerSettingsDraft,
};
pub use progress::{ProgressError, ProgressReport, compute_progress};
pub use scheduler::{BucketError, bucket_range, practice, to_bucket_sets, update};
pub use time::Clock;
