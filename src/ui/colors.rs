//! Centralized color constants for the UI.
//!
//! Marker and particle colors live with the hero renderer; these cover the
//! panels and overlay drawn around it.

use eframe::egui::Color32;

/// Page chrome and hero copy.
pub mod page {
    use super::Color32;

    /// Deep navy behind the map.
    pub const BACKGROUND: Color32 = Color32::from_rgb(4, 10, 22);
    /// Top bar fill.
    pub const BAR: Color32 = Color32::from_rgb(8, 16, 30);
    /// Headline text.
    pub const TEXT: Color32 = Color32::from_rgb(236, 242, 248);
    /// Secondary copy and stat labels.
    pub const MUTED: Color32 = Color32::from_rgb(140, 156, 176);
    /// Teal accent shared with the major markers.
    pub const ACCENT: Color32 = Color32::from_rgb(0, 201, 167);
    /// Brighter accent for highlighted words and counters.
    pub const ACCENT_BRIGHT: Color32 = Color32::from_rgb(0, 255, 224);
    /// Badge pill background.
    pub const BADGE_FILL: Color32 = Color32::from_rgba_premultiplied(0, 40, 36, 120);
}

/// Contact form colors.
pub mod form {
    use super::Color32;

    /// Field error text.
    pub const ERROR: Color32 = Color32::from_rgb(255, 80, 80);
    /// Delivered message confirmation.
    pub const SUCCESS: Color32 = Color32::from_rgb(0, 230, 180);
    /// Field labels.
    pub const LABEL: Color32 = Color32::from_rgb(160, 172, 190);
}
