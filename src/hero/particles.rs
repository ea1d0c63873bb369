//! Ambient sea particles drifting behind the markers.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of particles in the default field
pub const DEFAULT_PARTICLE_COUNT: usize = 1800;
/// Point size in scene units
pub const PARTICLE_SIZE: f32 = 0.022;
/// Shared opacity of the whole field
pub const PARTICLE_OPACITY: f32 = 0.5;

/// Extent of the spawn volume (x, y, z) in scene units
const SPAWN_EXTENT: Vec3 = Vec3::new(22.0, 16.0, 3.0);
/// The field sits slightly behind the map plane
const SPAWN_Z_OFFSET: f32 = -1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientParticle {
    pub position: Vec3,
    /// Linear RGB in `[0, 1]`
    pub color: Vec3,
}

/// Fixed-size particle field. Positions drift in place every frame.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<AmbientParticle>,
}

impl ParticleField {
    /// Generates `count` particles from a seeded generator.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let particles = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SPAWN_EXTENT.x,
                    (rng.gen::<f32>() - 0.5) * SPAWN_EXTENT.y,
                    (rng.gen::<f32>() - 0.5) * SPAWN_EXTENT.z + SPAWN_Z_OFFSET,
                );

                // Vary between deep ocean blue and cyan
                let m: f32 = rng.gen();
                let color = Vec3::new(0.0, 0.35 + m * 0.45, 0.55 + m * 0.35);

                AmbientParticle { position, color }
            })
            .collect();

        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AmbientParticle> {
        self.particles.iter()
    }

    /// Adds one frame of drift at elapsed time `t` (seconds).
    ///
    /// Offsets accumulate without bounds or wraparound.
    pub fn drift(&mut self, t: f32) {
        for (i, particle) in self.particles.iter_mut().enumerate() {
            let offset = drift_offset(t, i);
            particle.position.x += offset.x;
            particle.position.y += offset.y;
        }
    }
}

/// Per-frame displacement for the particle at `index`.
pub fn drift_offset(t: f32, index: usize) -> Vec3 {
    let i = index as f32;
    Vec3::new(
        (t * 0.22 + i * 0.018).cos() * 0.0003,
        (t * 0.35 + i * 0.01).sin() * 0.0005,
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_bounds() {
        let field = ParticleField::generate(DEFAULT_PARTICLE_COUNT, 7);
        assert_eq!(field.len(), DEFAULT_PARTICLE_COUNT);

        for p in field.iter() {
            assert!(p.position.x.abs() <= 11.0);
            assert!(p.position.y.abs() <= 8.0);
            assert!((-3.0..=0.0).contains(&p.position.z));
            assert_eq!(p.color.x, 0.0);
            assert!((0.35..=0.8).contains(&p.color.y));
            assert!((0.55..=0.9).contains(&p.color.z));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::generate(64, 42);
        let b = ParticleField::generate(64, 42);
        assert!(a.iter().zip(b.iter()).all(|(p, q)| p == q));
    }

    #[test]
    fn test_drift_keeps_count_and_depth() {
        let mut field = ParticleField::generate(100, 1);
        let before: Vec<Vec3> = field.iter().map(|p| p.position).collect();

        field.drift(1.0);

        assert_eq!(field.len(), 100);
        for (p, old) in field.iter().zip(&before) {
            assert_eq!(p.position.z, old.z);
            assert!((p.position.x - old.x).abs() <= 0.0003 + 1e-5);
            assert!((p.position.y - old.y).abs() <= 0.0005 + 1e-5);
        }
    }

    #[test]
    fn test_drift_depends_on_index() {
        let a = drift_offset(2.0, 0);
        let b = drift_offset(2.0, 500);
        assert!((a - b).length() > 1e-6);
    }

    #[test]
    fn test_drift_is_unbounded() {
        let mut field = ParticleField::generate(1, 3);
        let start = field.iter().next().unwrap().position;
        // t = 0 every frame: x keeps moving by cos(0) * 0.0003
        for _ in 0..10_000 {
            field.drift(0.0);
        }
        let end = field.iter().next().unwrap().position;
        assert!((end.x - start.x - 3.0).abs() < 1e-2);
    }
}
