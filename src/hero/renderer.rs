//! Hero scene rendering.
//!
//! Draws particles and markers to the egui canvas.

use super::markers::{MarkerVisual, Primitive, PrimitiveShape};
use super::particles::{PARTICLE_OPACITY, PARTICLE_SIZE};
use super::scene::HeroScene;
use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};
use glam::Vec3;

/// Smallest particle radius worth drawing, in points
const MIN_PARTICLE_RADIUS: f32 = 0.6;
/// Extra hit radius around a core dot for hover labels
const HOVER_SLOP: f32 = 4.0;

/// Renders the whole hero scene into `rect`.
///
/// A zero-area rect draws nothing.
pub fn render_hero_scene(painter: &Painter, rect: Rect, scene: &HeroScene) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    render_particles(painter, rect, scene);

    // Stable sort keeps marker order within each layer
    let mut layers: Vec<(&MarkerVisual, &Primitive)> = scene
        .markers
        .iter()
        .flat_map(|marker| marker.layers().map(move |primitive| (marker, primitive)))
        .collect();
    layers.sort_by(|a, b| a.1.depth.total_cmp(&b.1.depth));

    for (marker, primitive) in layers {
        render_primitive(painter, rect, scene, marker, primitive);
    }
}

/// Renders the ambient particle field.
fn render_particles(painter: &Painter, rect: Rect, scene: &HeroScene) {
    let alpha = (PARTICLE_OPACITY * 255.0).round() as u8;

    for particle in scene.particles.iter() {
        let world = scene.parallax.apply(particle.position);
        let Some(pos) = scene.camera.world_to_screen(world, rect) else {
            continue;
        };
        if !rect.contains(pos) {
            continue;
        }

        let radius =
            (PARTICLE_SIZE * 0.5 * scene.camera.pixels_per_unit(world.z)).max(MIN_PARTICLE_RADIUS);
        painter.circle_filled(pos, radius, particle_color(particle.color, alpha));
    }
}

/// Converts a unit RGB particle color to a painter color.
fn particle_color(color: Vec3, alpha: u8) -> Color32 {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    Color32::from_rgba_unmultiplied(c.x as u8, c.y as u8, c.z as u8, alpha)
}

/// Renders a single marker layer.
fn render_primitive(
    painter: &Painter,
    rect: Rect,
    scene: &HeroScene,
    marker: &MarkerVisual,
    primitive: &Primitive,
) {
    if primitive.is_degenerate() {
        return;
    }

    let world = marker_world_position(scene, marker, primitive.depth);
    let Some(center) = scene.camera.world_to_screen(world, rect) else {
        return;
    };
    let ppu = scene.camera.pixels_per_unit(world.z) * primitive.scale;
    let color = primitive.tinted();

    match primitive.shape {
        PrimitiveShape::Disk { radius } => {
            let radius = radius * ppu;
            if !rect.expand(radius).contains(center) {
                return;
            }
            painter.circle_filled(center, radius, color);
        }
        PrimitiveShape::Ring { inner, outer } => {
            let outer_px = outer * ppu;
            if !rect.expand(outer_px).contains(center) {
                return;
            }
            let mid = (inner + outer) * 0.5 * ppu;
            let width = (outer - inner) * ppu;
            painter.circle_stroke(center, mid, Stroke::new(width, color));
        }
    }
}

fn marker_world_position(scene: &HeroScene, marker: &MarkerVisual, depth: f32) -> Vec3 {
    let local = Vec3::new(marker.position.x as f32, marker.position.y as f32, depth);
    scene.parallax.apply(local)
}

/// Returns the marker whose core dot is under `pointer`, if any.
pub fn hovered_marker<'a>(
    rect: Rect,
    scene: &'a HeroScene,
    pointer: Pos2,
) -> Option<&'a MarkerVisual> {
    scene
        .markers
        .iter()
        .filter_map(|marker| {
            let world = marker_world_position(scene, marker, marker.dot.depth);
            let center = scene.camera.world_to_screen(world, rect)?;
            let PrimitiveShape::Disk { radius } = marker.dot.shape else {
                return None;
            };
            let radius = radius * scene.camera.pixels_per_unit(world.z) + HOVER_SLOP;
            let dist = center.distance(pointer);
            (dist <= radius).then_some((marker, dist))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(marker, _)| marker)
}

/// Draws a name label next to a marker.
pub fn render_marker_label(painter: &Painter, rect: Rect, scene: &HeroScene, marker: &MarkerVisual) {
    let world = marker_world_position(scene, marker, marker.dot.depth);
    let Some(center) = scene.camera.world_to_screen(world, rect) else {
        return;
    };

    let color = marker.dot.color;
    let label_pos = center + Vec2::new(8.0, -2.0);
    let font = FontId::proportional(if marker.point.is_major { 13.0 } else { 11.0 });

    painter.text(label_pos, Align2::LEFT_CENTER, marker.point.name, font, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{ProjectionConfig, GREECE_LOCATIONS};

    #[test]
    fn test_hovered_marker_finds_athens() {
        let mut scene = HeroScene::new(GREECE_LOCATIONS, &ProjectionConfig::default(), 0);
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(1200.0, 800.0));
        scene.camera.sync_viewport(rect.size());

        let athens = &scene.markers[0];
        let world = marker_world_position(&scene, athens, athens.dot.depth);
        let center = scene.camera.world_to_screen(world, rect).unwrap();

        let hovered = hovered_marker(rect, &scene, center).unwrap();
        assert_eq!(hovered.point.name, "Αθήνα");

        assert!(hovered_marker(rect, &scene, Pos2::new(2.0, 2.0)).is_none());
    }

    #[test]
    fn test_particle_color_rounds_channels() {
        let color = particle_color(Vec3::new(0.5, 0.999, 0.2), 255);
        assert_eq!(color.r(), 128);
        assert_eq!(color.g(), 255);
        assert_eq!(color.b(), 51);
        assert_eq!(color.a(), 255);
    }
}
