//! Layered location markers and their pulse animation.

use crate::geo::{GeoPoint, ProjectionConfig, ScenePosition};
use eframe::egui::Color32;

/// Angular speed of the pulse (radians per second)
const PULSE_SPEED: f32 = 2.2;
/// Phase offset between consecutive markers
const PULSE_PHASE_STEP: f32 = 0.6;

/// Two-tier marker styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTier {
    Major,
    Minor,
}

impl MarkerTier {
    pub fn of(point: &GeoPoint) -> Self {
        if point.is_major {
            MarkerTier::Major
        } else {
            MarkerTier::Minor
        }
    }

    /// Color shared by the glow disk and pulse ring.
    pub fn halo_color(&self) -> Color32 {
        match self {
            MarkerTier::Major => Color32::from_rgb(0x00, 0xe8, 0xc0),
            MarkerTier::Minor => Color32::from_rgb(0x00, 0xbc, 0xd4),
        }
    }

    pub fn dot_color(&self) -> Color32 {
        match self {
            MarkerTier::Major => Color32::from_rgb(0x00, 0xff, 0xe0),
            MarkerTier::Minor => Color32::from_rgb(0x00, 0xd4, 0xe8),
        }
    }

    pub fn dot_opacity(&self) -> f32 {
        match self {
            MarkerTier::Major => 1.0,
            MarkerTier::Minor => 0.85,
        }
    }

    /// Only major hubs carry the outer ring.
    pub fn has_outer_ring(&self) -> bool {
        matches!(self, MarkerTier::Major)
    }
}

/// Geometry of a single marker layer, in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveShape {
    Disk { radius: f32 },
    Ring { inner: f32, outer: f32 },
}

/// One drawable layer of a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: PrimitiveShape,
    pub color: Color32,
    pub opacity: f32,
    /// Uniform scale around the marker center
    pub scale: f32,
    /// Height above the map plane; higher layers draw on top
    pub depth: f32,
}

impl Primitive {
    fn disk(radius: f32, color: Color32, opacity: f32, depth: f32) -> Self {
        Self {
            shape: PrimitiveShape::Disk { radius },
            color,
            opacity,
            scale: 1.0,
            depth,
        }
    }

    fn ring(inner: f32, outer: f32, color: Color32, opacity: f32, depth: f32) -> Self {
        Self {
            shape: PrimitiveShape::Ring { inner, outer },
            color,
            opacity,
            scale: 1.0,
            depth,
        }
    }

    /// Returns the color with the current opacity applied.
    pub fn tinted(&self) -> Color32 {
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.color.r(), self.color.g(), self.color.b(), alpha)
    }

    /// True if the layer covers no area (non-positive size or scale).
    pub fn is_degenerate(&self) -> bool {
        match self.shape {
            PrimitiveShape::Disk { radius } => radius * self.scale <= 0.0,
            PrimitiveShape::Ring { inner, outer } => outer * self.scale <= 0.0 || outer <= inner,
        }
    }
}

/// All layers drawn for one location.
#[derive(Debug, Clone)]
pub struct MarkerVisual {
    /// Position in the source point list; drives the pulse phase
    pub index: usize,
    pub point: GeoPoint,
    pub position: ScenePosition,
    pub glow: Primitive,
    pub outer_ring: Option<Primitive>,
    pub pulse_ring: Primitive,
    pub dot: Primitive,
}

impl MarkerVisual {
    fn new(index: usize, point: &GeoPoint, position: ScenePosition) -> Self {
        let tier = MarkerTier::of(point);
        let s = point.display_size;
        let halo = tier.halo_color();

        let outer_ring = tier
            .has_outer_ring()
            .then(|| Primitive::ring(s * 3.2, s * 4.5, Color32::from_rgb(0x00, 0xc9, 0xa7), 0.1, 0.004));

        Self {
            index,
            point: *point,
            position,
            glow: Primitive::disk(s * 3.0, halo, 0.03, 0.001),
            outer_ring,
            pulse_ring: Primitive::ring(s * 1.6, s * 2.6, halo, 0.25, 0.008),
            dot: Primitive::disk(s, tier.dot_color(), tier.dot_opacity(), 0.012),
        }
    }

    /// Updates ring and glow from the pulse phase at time `t` (seconds).
    pub fn apply_pulse(&mut self, t: f32) {
        let pulse = pulse_phase(t, self.index);
        self.pulse_ring.opacity = 0.12 + pulse * 0.35;
        self.pulse_ring.scale = 1.0 + pulse * 0.4;
        self.glow.opacity = 0.015 + pulse * 0.04;
    }

    /// Layers in back-to-front draw order.
    pub fn layers(&self) -> impl Iterator<Item = &Primitive> {
        std::iter::once(&self.glow)
            .chain(self.outer_ring.iter())
            .chain(std::iter::once(&self.pulse_ring))
            .chain(std::iter::once(&self.dot))
    }
}

/// Pulse phase in `[0, 1]` for the marker at `index`.
///
/// Each index is offset so neighbouring markers breathe out of phase.
pub fn pulse_phase(t: f32, index: usize) -> f32 {
    (t * PULSE_SPEED + index as f32 * PULSE_PHASE_STEP).sin() * 0.5 + 0.5
}

/// Builds one marker per point, preserving input order.
pub fn build_markers(points: &[GeoPoint], projection: &ProjectionConfig) -> Vec<MarkerVisual> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let position = projection.project_coord(point.coord());
            MarkerVisual::new(index, point, position)
        })
        .collect()
}
