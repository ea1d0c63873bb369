//! Animated hero map.
//!
//! This module provides:
//! - Layered location markers with an out-of-phase pulse
//! - A drifting ambient particle field
//! - Pointer-driven parallax
//! - A perspective camera and an explicit start/stop animation loop
//! - Rendering through egui's Painter API

mod camera;
mod frame_loop;
mod markers;
mod particles;
mod pointer;
mod renderer;
mod scene;

pub use particles::DEFAULT_PARTICLE_COUNT;
pub use renderer::{hovered_marker, render_hero_scene, render_marker_label};
pub use scene::HeroScene;
