//! Audio preferences
//!
//! Read once at startup from the page config; never written back.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Begin with all audio muted
    pub start_muted: bool,
    /// Looping background track, relative to the page
    pub music_src: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
            start_muted: false,
            music_src: "sounds/bgm.mp3".to_string(),
        }
    }
}

impl Settings {
    /// Music volume after the master volume is applied
    pub fn effective_music_volume(&self) -> f32 {
        (self.master_volume * self.music_volume).clamp(0.0, 1.0)
    }

    /// Effect volume after the master volume is applied, zero when muted
    pub fn effective_sfx_volume(&self, muted: bool) -> f32 {
        if muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }
}
