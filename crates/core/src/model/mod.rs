mod buckets;
mod difficulty;
mod flashcard;
mod settings;

pub use buckets::{BucketMap, BucketRange, BucketSet, Buckets};
pub use difficulty::{AnswerDifficulty, AnswerRecord, DifficultyError};
pub use flashcard::Flashcard;
pub use settings::{
    DEFAULT_HARDEST_CARDS_LIMIT, DEFAULT_MASK_CHAR, DEFAULT_RECENT_WINDOW, LeitnerSettings,
    LeitnerSettingsDraft, SettingsError,
};
