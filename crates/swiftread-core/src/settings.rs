//! User-tunable trainer settings and their persistence seam.

use serde::{Deserialize, Serialize};

pub const MIN_WPM: u32 = 100;
pub const MAX_WPM: u32 = 1_500;
pub const WPM_STEP: u32 = 50;

/// Eye-training overlay applied by renderers. Purely presentational;
/// the playback engine ignores it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingDrill {
    None,
    Peripheral,
    ZPattern,
    AntiRegression,
}

impl ReadingDrill {
    pub fn label(self) -> &'static str {
        match self {
            ReadingDrill::None => "Off",
            ReadingDrill::Peripheral => "Peripheral",
            ReadingDrill::ZPattern => "Z-Pattern",
            ReadingDrill::AntiRegression => "Anti-Regression",
        }
    }

    pub fn cycled(self) -> Self {
        match self {
            ReadingDrill::None => ReadingDrill::Peripheral,
            ReadingDrill::Peripheral => ReadingDrill::ZPattern,
            ReadingDrill::ZPattern => ReadingDrill::AntiRegression,
            ReadingDrill::AntiRegression => ReadingDrill::None,
        }
    }
}

/// Defaults a new reading session starts from. Sessions may override
/// these locally; hosts persist changes back through a
/// [`SettingsStore`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainerSettings {
    pub wpm: u32,
    pub chunk_size: usize,
    pub font_size: u16,
    pub bionic_enabled: bool,
    pub drill: ReadingDrill,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            wpm: 500,
            chunk_size: 55,
            font_size: 15,
            bionic_enabled: false,
            drill: ReadingDrill::None,
        }
    }
}

/// Abstract settings persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<TrainerSettings>, Self::Error>;
    fn save(&mut self, settings: &TrainerSettings) -> Result<(), Self::Error>;
}
