//! UI modules for the landing page.
//!
//! The UI is split into distinct parts:
//! - Top bar: brand, language toggle, contact button
//! - Central hero panel: animated map with headline overlay
//! - Contact modal: form posted to the relay

mod colors;
mod contact_modal;
mod hero_panel;
mod top_bar;

pub use contact_modal::render_contact_modal;
pub use hero_panel::render_hero_panel;
pub use top_bar::render_top_bar;
