//! User-facing settings.
//!
//! Settings are persisted to localStorage on the web and to an optional JSON
//! file on native, so they survive reloads.

use crate::geo::ProjectionConfig;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// Relay endpoint baked in at build time; empty means "not connected".
const DEFAULT_CONTACT_ENDPOINT: &str = match option_env!("IQTRAVEL_CONTACT_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "",
};

/// Persisted preferences plus the contact relay endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    /// URL the contact form posts to.
    pub contact_endpoint: String,
    /// Stops the hero animation and skips entrance tweens.
    pub reduced_motion: bool,
    pub projection: ProjectionConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            reduced_motion: false,
            projection: ProjectionConfig::default(),
        }
    }
}

impl Settings {
    /// localStorage key for persisting settings.
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "iqtravel_settings";

    /// Environment variable naming the native settings file.
    #[cfg(not(target_arch = "wasm32"))]
    const PATH_VAR: &'static str = "IQTRAVEL_SETTINGS";

    pub fn is_contact_configured(&self) -> bool {
        !self.contact_endpoint.trim().is_empty()
    }

    /// Parses a settings blob, falling back to defaults on error.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };

        let storage = match window.local_storage() {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        let json = match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        log::info!("Loaded settings from localStorage");
        Self::from_json(&json)
    }

    /// Load settings from the file named by `IQTRAVEL_SETTINGS`, if any.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path);
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Failed to read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        let storage = match window.local_storage() {
            Ok(Some(s)) => s,
            _ => return,
        };

        let json = match serde_json::to_string(self) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };

        if let Err(e) = storage.set_item(Self::STORAGE_KEY, &json) {
            log::warn!("Failed to save settings: {:?}", e);
        } else {
            log::info!("Saved settings to localStorage");
        }
    }

    /// Save settings to the file named by `IQTRAVEL_SETTINGS`, if set.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        let Ok(path) = std::env::var(Self::PATH_VAR) else {
            log::debug!("{} not set, settings not saved", Self::PATH_VAR);
            return;
        };

        let json = match serde_json::to_string_pretty(self) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return;
            }
        };

        if let Err(e) = std::fs::write(&path, json) {
            log::warn!("Failed to save settings to {}: {}", path, e);
        } else {
            log::info!("Saved settings to {}", path);
        }
    }
}
