use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filler used in place of a hidden letter.
pub const DEFAULT_MASK_CHAR: char = '_';
/// How many of the latest answers count as "recent" in a progress report.
pub const DEFAULT_RECENT_WINDOW: usize = 10;
/// How many cards a progress report lists as hardest.
pub const DEFAULT_HARDEST_CARDS_LIMIT: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("mask character must be visible, got {0:?}")]
    InvalidMaskChar(char),

    #[error("recent window must be > 0")]
    InvalidRecentWindow,

    #[error("hardest cards limit must be > 0")]
    InvalidHardestCardsLimit,
}

/// Tunables for hinting and progress reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeitnerSettings {
    mask_char: char,
    recent_window: usize,
    hardest_cards_limit: usize,
}

/// Unvalidated settings, e.g. as read from a config document.
///
/// Missing fields fall back to the defaults on [`validate`](Self::validate).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeitnerSettingsDraft {
    pub mask_char: Option<char>,
    pub recent_window: Option<usize>,
    pub hardest_cards_limit: Option<usize>,
}

impl LeitnerSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft and fill in defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidMaskChar` if the mask is whitespace or a control character
    /// - `InvalidRecentWindow` if the recent window is zero
    /// - `InvalidHardestCardsLimit` if the hardest-cards limit is zero
    pub fn validate(self) -> Result<LeitnerSettings, SettingsError> {
        let mask_char = self.mask_char.unwrap_or(DEFAULT_MASK_CHAR);
        let recent_window = self.recent_window.unwrap_or(DEFAULT_RECENT_WINDOW);
        let hardest_cards_limit = self
            .hardest_cards_limit
            .unwrap_or(DEFAULT_HARDEST_CARDS_LIMIT);

        if mask_char.is_whitespace() || mask_char.is_control() {
            return Err(SettingsError::InvalidMaskChar(mask_char));
        }
        if recent_window == 0 {
            return Err(SettingsError::InvalidRecentWindow);
        }
        if hardest_cards_limit == 0 {
            return Err(SettingsError::InvalidHardestCardsLimit);
        }

        Ok(LeitnerSettings {
            mask_char,
            recent_window,
            hardest_cards_limit,
        })
    }
}

impl LeitnerSettings {
    #[must_use]
    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    #[must_use]
    pub fn recent_window(&self) -> usize {
        self.recent_window
    }

    #[must_use]
    pub fn hardest_cards_limit(&self) -> usize {
        self.hardest_cards_limit
    }
}

impl Default for LeitnerSettings {
    fn default() -> Self {
        Self {
            mask_char: DEFAULT_MASK_CHAR,
            recent_window: DEFAULT_RECENT_WINDOW,
            hardest_cards_limit: DEFAULT_HARDEST_CARDS_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_matches_defaults() {
        let settings = LeitnerSettingsDraft::new().validate().unwrap();
        assert_eq!(settings, LeitnerSettings::default());
        assert_eq!(settings.mask_char(), '_');
        assert_eq!(settings.recent_window(), 10);
        assert_eq!(settings.hardest_cards_limit(), 5);
    }

    #[test]
    fn rejects_invisible_mask() {
        for mask in [' ', '\t', '\u{0}'] {
            let draft = LeitnerSettingsDraft {
                mask_char: Some(mask),
                ..LeitnerSettingsDraft::default()
            };
            assert_eq!(
                draft.validate().unwrap_err(),
                SettingsError::InvalidMaskChar(mask)
            );
        }
    }

    #[test]
    fn rejects_zero_limits() {
        let draft = LeitnerSettingsDraft {
            recent_window: Some(0),
            ..LeitnerSettingsDraft::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(SettingsError::InvalidRecentWindow)
        ));

        let draft = LeitnerSettingsDraft {
            hardest_cards_limit: Some(0),
            ..LeitnerSettingsDraft::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(SettingsError::InvalidHardestCardsLimit)
        ));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let draft: LeitnerSettingsDraft = serde_json::from_str(r#"{"mask_char":"*"}"#).unwrap();
        let settings = draft.validate().unwrap();

        assert_eq!(settings.mask_char(), '*');
        assert_eq!(settings.recent_window(), DEFAULT_RECENT_WINDOW);
    }
}
