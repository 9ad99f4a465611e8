use crate::utils::*;
use serde::{Deserialize, Serialize};
use snake_core::Score;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub music: bool,
}

impl StorageKey for Settings {
    const KEY: &'static str = "snake:settings";
}

impl Settings {
    /// Flips the stored preference, whatever is audible right now.
    pub(crate) fn with_music_toggled(self) -> Self {
        Self {
            music: !self.music,
        }
    }
}

/// Best score across sessions, stored as a bare number.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct HighScore(pub Score);

impl StorageKey for HighScore {
    const KEY: &'static str = "snake:high-score";
}

impl HighScore {
    /// Namespaced score if present, otherwise whatever the earlier page left behind.
    pub(crate) fn load() -> Self {
        Self::local_get()
            .or_else(|| LegacyHighScore::local_get().map(|legacy| HighScore(legacy.0)))
            .unwrap_or_default()
    }
}

/// Score written by the earlier page as a bare number, only ever read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub(crate) struct LegacyHighScore(pub Score);

impl StorageKey for LegacyHighScore {
    const KEY: &'static str = "snake_high";
}
