use thiserror::Error;

use crate::hint::HintError;
use crate::model::{DifficultyError, SettingsError};
use crate::progress::ProgressError;
use crate::scheduler::BucketError;

/// Any error the crate can return.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Bucket(#[from] BucketError),
    #[error(transparent)]
    Hint(#[from] HintError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
