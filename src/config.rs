//! Startup configuration
//!
//! On the web the page may embed
//! `<script id="game-config" type="application/json">{...}</script>`; the
//! native runner takes a JSON file path. Anything missing or malformed falls
//! back to defaults with a warning.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::tuning::Tuning;

/// DOM id of the embedded JSON config block
pub const CONFIG_ELEMENT_ID: &str = "game-config";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tuning: Tuning,
    pub settings: Settings,
}

impl GameConfig {
    /// Parse a config document; tuning is sanitized on success
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        config.tuning = config.tuning.sanitized();
        Ok(config)
    }

    /// Parse, or warn and fall back to defaults
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed game config: {}", e);
                Self::default()
            }
        }
    }

    /// Load config from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => {
                log::info!("Loaded game config from page");
                Self::from_json_or_default(&json)
            }
            _ => {
                log::info!("Using default game config");
                Self::default()
            }
        }
    }

    /// Load config from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded game config from {}", path.display());
                Self::from_json_or_default(&json)
            }
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
