//! Perspective camera for the hero scene.
//!
//! The camera sits on the +z axis looking at the origin. Scene units are
//! converted into egui screen positions inside the canvas rectangle.

use eframe::egui::{Pos2, Rect, Vec2};
use glam::Vec3;

/// Vertical field of view in degrees
const DEFAULT_FOV_Y_DEG: f32 = 48.0;
/// Distance from which the whole map is visible
const DEFAULT_DISTANCE: f32 = 22.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

#[derive(Debug, Clone)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub distance: f32,
    /// Width over height of the output surface
    pub aspect: f32,
    /// Output size in points
    pub viewport: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        let mut camera = Self {
            fov_y_deg: DEFAULT_FOV_Y_DEG,
            distance: DEFAULT_DISTANCE,
            aspect: 1.0,
            viewport: Vec2::ZERO,
        };
        camera.resize(width, height);
        camera
    }

    /// Updates output size and aspect ratio.
    ///
    /// A zero height is clamped to one so the aspect stays finite.
    pub fn resize(&mut self, width: f32, height: f32) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        self.viewport = Vec2::new(width, height);
        self.aspect = width / height.max(1.0);
    }

    /// Resizes only when the surface size actually changed. Returns true on change.
    pub fn sync_viewport(&mut self, size: Vec2) -> bool {
        if (size - self.viewport).length_sq() < f32::EPSILON {
            return false;
        }
        log::debug!(
            "Hero camera resized to {:.0}x{:.0}",
            size.x.max(0.0),
            size.y.max(0.0)
        );
        self.resize(size.x, size.y);
        true
    }

    fn half_height_at(&self, depth: f32) -> f32 {
        (self.fov_y_deg.to_radians() * 0.5).tan() * depth
    }

    /// Screen points per scene unit for geometry at height `z`.
    pub fn pixels_per_unit(&self, z: f32) -> f32 {
        let depth = self.distance - z;
        if depth <= NEAR {
            return 0.0;
        }
        (self.viewport.y.max(1.0) * 0.5) / self.half_height_at(depth)
    }

    /// Projects a scene-space point into the canvas rectangle.
    ///
    /// Returns `None` for points outside the near/far clip range.
    pub fn world_to_screen(&self, point: Vec3, rect: Rect) -> Option<Pos2> {
        let depth = self.distance - point.z;
        if !(NEAR..=FAR).contains(&depth) {
            return None;
        }

        let half_h = self.half_height_at(depth);
        let ndc_x = point.x / (half_h * self.aspect.max(f32::EPSILON));
        let ndc_y = point.y / half_h;

        let center = rect.center();
        Some(Pos2::new(
            center.x + ndc_x * rect.width() * 0.5,
            // Flip Y since screen Y increases downward
            center.y - ndc_y * rect.height() * 0.5,
        ))
    }
}
