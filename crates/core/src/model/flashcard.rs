use serde::{Deserialize, Serialize};

//
// ─── FLASHCARD ─────────────────────────────────────────────────────────────────
//

/// A single flashcard.
///
/// Cards are plain values: two cards are the same card iff every field is
/// equal. They are never mutated once built, so the only way to "change" a
/// card is to build a new one.
///
/// # Examples
///
/// ```
/// # use leitner_core::model::Flashcard;
/// let card = Flashcard::new("cat", "a small pet")
///     .with_hint("meows")
///     .with_tags(["animals"]);
///
/// assert_eq!(card.front(), "cat");
/// assert_eq!(card.hint(), Some("meows"));
/// assert_eq!(card.tags(), ["animals"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Flashcard {
    front: String,
    back: String,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl Flashcard {
    #[must_use]
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            hint: None,
            tags: Vec::new(),
        }
    }

    /// Rehydrate a card from its four stored fields.
    #[must_use]
    pub fn from_parts(
        front: impl Into<String>,
        back: impl Into<String>,
        hint: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            hint,
            tags,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Prompt text shown to the learner.
    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }

    /// Hint stored with the card, if the author wrote one.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
