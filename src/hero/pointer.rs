//! Pointer tracking and parallax for the hero scene.
//!
//! The pointer is sampled once per frame on the UI thread, so the state is
//! a plain value owned by the scene.

use glam::{Quat, Vec2, Vec3};

/// Per-axis gain applied to the raw pointer before smoothing
const POINTER_GAIN: Vec2 = Vec2::new(0.45, 0.28);
/// Fraction of the remaining distance covered each frame
const SMOOTHING: f32 = 0.03;

/// Scene translation per unit of smoothed pointer
const PARALLAX_TRANSLATE: Vec2 = Vec2::new(0.75, 0.4);
/// Group yaw per unit of smoothed x
const PARALLAX_YAW: f32 = 0.012;
/// Group pitch per unit of smoothed y
const PARALLAX_PITCH: f32 = 0.008;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Latest sample, normalized to `[-1, 1]` with y pointing down
    pub raw: Vec2,
    pub smoothed: Vec2,
}

impl PointerState {
    /// Records a pointer position given in screen points.
    pub fn set_from_screen(&mut self, pos: Vec2, screen_size: Vec2) {
        let size = screen_size.max(Vec2::ONE);
        self.raw = pos / size * 2.0 - Vec2::ONE;
    }

    /// One step of the single-pole low-pass filter toward the gained target.
    pub fn smooth(&mut self) {
        self.smoothed += (self.raw * POINTER_GAIN - self.smoothed) * SMOOTHING;
    }

    pub fn parallax(&self) -> Parallax {
        Parallax::from_smoothed(self.smoothed)
    }
}

/// Whole-group transform derived from the smoothed pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Parallax {
    fn from_smoothed(smoothed: Vec2) -> Self {
        Self {
            // Pointer below center lifts the map; pitch tilts the opposite way
            translation: Vec3::new(
                smoothed.x * PARALLAX_TRANSLATE.x,
                smoothed.y * PARALLAX_TRANSLATE.y,
                0.0,
            ),
            rotation: Quat::from_rotation_y(smoothed.x * PARALLAX_YAW)
                * Quat::from_rotation_x(-smoothed.y * PARALLAX_PITCH),
        }
    }

    /// Applies the group transform to a scene-space point.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_normalization() {
        let mut pointer = PointerState::default();
        let size = Vec2::new(800.0, 600.0);

        pointer.set_from_screen(Vec2::new(400.0, 300.0), size);
        assert!(pointer.raw.length() < 1e-6);

        pointer.set_from_screen(Vec2::ZERO, size);
        assert_eq!(pointer.raw, Vec2::new(-1.0, -1.0));

        pointer.set_from_screen(size, size);
        assert_eq!(pointer.raw, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_zero_screen_is_finite() {
        let mut pointer = PointerState::default();
        pointer.set_from_screen(Vec2::new(5.0, 5.0), Vec2::ZERO);
        assert!(pointer.raw.is_finite());
    }

    #[test]
    fn test_smoothing_converges_without_overshoot() {
        let mut pointer = PointerState {
            raw: Vec2::new(1.0, 1.0),
            smoothed: Vec2::ZERO,
        };
        let target = POINTER_GAIN;

        let mut last = pointer.smoothed;
        for _ in 0..500 {
            pointer.smooth();
            assert!(pointer.smoothed.x >= last.x && pointer.smoothed.y >= last.y);
            assert!(pointer.smoothed.x < target.x && pointer.smoothed.y < target.y);
            last = pointer.smoothed;
        }
        assert!((pointer.smoothed - target).length() < 1e-3);
    }

    #[test]
    fn test_first_step_is_three_percent() {
        let mut pointer = PointerState {
            raw: Vec2::new(1.0, 0.0),
            smoothed: Vec2::ZERO,
        };
        pointer.smooth();
        assert!((pointer.smoothed.x - 0.45 * 0.03).abs() < 1e-7);
        assert_eq!(pointer.smoothed.y, 0.0);
    }

    #[test]
    fn test_parallax_direction() {
        let pointer = PointerState {
            raw: Vec2::ZERO,
            smoothed: Vec2::new(0.4, 0.2),
        };
        let parallax = pointer.parallax();
        assert!((parallax.translation.x - 0.3).abs() < 1e-6);
        // Pointer below center moves the scene up
        assert!((parallax.translation.y - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_below_center_lifts_map() {
        let pointer = PointerState {
            raw: Vec2::ZERO,
            smoothed: Vec2::new(0.0, 0.2),
        };
        let parallax = pointer.parallax();
        assert!(parallax.translation.y > 0.0);

        // Pitch keeps the opposite sign to the lift
        let (axis, angle) = parallax.rotation.to_axis_angle();
        assert!(axis.x * angle < 0.0);

        let moved = parallax.apply(Vec3::ZERO);
        assert!((moved.y - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_centered_pointer_is_identity() {
        let parallax = PointerState::default().parallax();
        let p = Vec3::new(1.0, -2.0, 0.5);
        assert!((parallax.apply(p) - p).length() < 1e-6);
    }
}
