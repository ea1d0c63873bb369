//! Application state management.
//!
//! State is organized into logical groupings that correspond to different
//! areas of the page: persisted settings, the hero scene and its overlay,
//! and the contact modal.

mod contact;
mod intro;
mod settings;

pub use contact::ContactStatus;
pub use intro::{IntroItem, IntroTimeline, INTRO_RISE};
pub use settings::Settings;

use crate::geo::GREECE_LOCATIONS;
use crate::hero::{HeroScene, DEFAULT_PARTICLE_COUNT};
use crate::i18n::Language;
use contact::ContactModalState;

/// Root application state containing all sub-states.
pub struct AppState {
    /// Persisted preferences
    pub settings: Settings,

    /// Animated map behind the hero copy
    pub hero: HeroScene,

    /// Entrance tweens and stat counters for the hero copy
    pub intro: IntroTimeline,

    /// Contact modal form and submit status
    pub contact: ContactModalState,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let hero = HeroScene::new(
            GREECE_LOCATIONS,
            &settings.projection,
            DEFAULT_PARTICLE_COUNT,
        );

        Self {
            settings,
            hero,
            intro: IntroTimeline::new(GREECE_LOCATIONS),
            contact: ContactModalState::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    /// Switches the UI language and persists the choice.
    pub fn toggle_language(&mut self) {
        self.settings.language = self.settings.language.toggled();
        log::info!("Language set to {}", self.settings.language.code());
        self.settings.save();
    }

    /// Turns reduced motion on or off, stopping the hero loop when on.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.settings.reduced_motion == reduced {
            return;
        }
        self.settings.reduced_motion = reduced;
        if reduced {
            self.hero.frame_loop.stop();
        }
        log::info!("Reduced motion {}", if reduced { "on" } else { "off" });
        self.settings.save();
    }

    /// Time on the overlay timeline; reduced motion jumps to the end.
    pub fn intro_time(&self) -> f32 {
        if self.settings.reduced_motion {
            f32::INFINITY
        } else {
            self.hero.time
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_scene_from_settings() {
        let state = AppState::new(Settings::default());
        assert_eq!(state.hero.markers.len(), GREECE_LOCATIONS.len());
        assert!(!state.hero.frame_loop.is_running());
        assert!(!state.contact.open);
    }

    #[test]
    fn test_reduced_motion_stops_loop() {
        let mut state = AppState::new(Settings::default());
        state.hero.frame_loop.start(web_time::Instant::now());
        assert!(state.hero.frame_loop.is_running());

        state.set_reduced_motion(true);
        assert!(!state.hero.frame_loop.is_running());
        assert_eq!(state.intro_time(), f32::INFINITY);
    }

    #[test]
    fn test_toggle_language() {
        let mut state = AppState::new(Settings::default());
        assert_eq!(state.language(), Language::Greek);
        state.toggle_language();
        assert_eq!(state.language(), Language::English);
    }
}
