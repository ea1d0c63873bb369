//! Hero scene state: markers, particles, pointer and camera.

use super::camera::Camera;
use super::frame_loop::FrameLoop;
use super::markers::{build_markers, MarkerVisual};
use super::particles::ParticleField;
use super::pointer::{Parallax, PointerState};
use crate::geo::{GeoPoint, ProjectionConfig};
use eframe::egui::Vec2;
use web_time::Instant;

/// Seed for the ambient particle field
const PARTICLE_SEED: u64 = 0x1a7e_5ea5;

/// Everything the hero renderer draws, plus the loop that animates it.
///
/// Markers and particles are created once; only their opacity, scale and
/// position offsets change afterwards.
pub struct HeroScene {
    pub markers: Vec<MarkerVisual>,
    pub particles: ParticleField,
    pub pointer: PointerState,
    pub parallax: Parallax,
    pub camera: Camera,
    pub frame_loop: FrameLoop,
    /// Elapsed seconds at the last update
    pub time: f32,
}

impl HeroScene {
    pub fn new(points: &[GeoPoint], projection: &ProjectionConfig, particle_count: usize) -> Self {
        let markers = build_markers(points, projection);
        let particles = ParticleField::generate(particle_count, PARTICLE_SEED);

        log::info!(
            "Built hero scene: {} markers ({} major), {} particles",
            markers.len(),
            markers.iter().filter(|m| m.point.is_major).count(),
            particles.len()
        );

        Self {
            markers,
            particles,
            pointer: PointerState::default(),
            parallax: Parallax::default(),
            camera: Camera::default(),
            frame_loop: FrameLoop::new(),
            time: 0.0,
        }
    }

    /// Records the latest pointer position (screen points).
    pub fn pointer_moved(&mut self, pos: Vec2, screen_size: Vec2) {
        self.pointer.set_from_screen(
            glam::Vec2::new(pos.x, pos.y),
            glam::Vec2::new(screen_size.x, screen_size.y),
        );
    }

    /// Ticks the frame loop and, if it is running, advances the animation.
    ///
    /// Returns true when another frame should be scheduled.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.frame_loop.tick(now) {
            Some(elapsed) => {
                self.update(elapsed.as_secs_f32());
                true
            }
            None => false,
        }
    }

    /// One animation step at elapsed time `t` (seconds).
    pub fn update(&mut self, t: f32) {
        self.time = t;

        self.pointer.smooth();
        self.parallax = self.pointer.parallax();

        for marker in self.markers.iter_mut() {
            marker.apply_pulse(t);
        }

        self.particles.drift(t);
    }
}
