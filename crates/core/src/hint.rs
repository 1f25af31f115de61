use thiserror::Error;

use crate::model::{Flashcard, LeitnerSettings};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("cannot generate a hint for an empty flashcard front")]
    EmptyFront,
}

/// Mask every letter of the card's front except the first and the last.
///
/// One-letter fronts come back unchanged and two-letter fronts are fully
/// revealed. Letters are counted as `char`s, so multi-byte text masks one
/// filler per letter. Reads nothing but `card.front()`.
///
/// # Errors
///
/// Returns `HintError::EmptyFront` if the front is empty.
///
/// # Examples
///
/// ```
/// # use leitner_core::hint::hint;
/// # use leitner_core::model::Flashcard;
/// let card = Flashcard::new("elephant", "a large animal");
/// assert_eq!(hint(&card)?, "e______t");
/// # Ok::<(), leitner_core::hint::HintError>(())
/// ```
pub fn hint(card: &Flashcard) -> Result<String, HintError> {
    hint_with(card, &LeitnerSettings::default())
}

/// Like [`hint`], masking with `settings.mask_char()`.
///
/// # Errors
///
/// Returns `HintError::EmptyFront` if the front is empty.
pub fn hint_with(card: &Flashcard, settings: &LeitnerSettings) -> Result<String, HintError> {
    let front = card.front();
    let mut letters = front.chars();

    let first = letters.next().ok_or(HintError::EmptyFront)?;
    let Some(last) = letters.next_back() else {
        return Ok(front.to_string());
    };

    let mut masked = String::with_capacity(front.len());
    masked.push(first);
    masked.extend(letters.map(|_| settings.mask_char()));
    masked.push(last);
    Ok(masked)
}
