//! Map projection and coordinate transformation.
//!
//! Converts geographic coordinates (lat/lon) into the virtual view-box space
//! of the background map, and from there into hero scene units centered on
//! the configured map center.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

/// Position of a point in hero scene units (y grows northward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenePosition {
    pub x: f64,
    pub y: f64,
}

/// Projection constants aligning geographic points with the background map.
///
/// The map's view box spans `output_x_range` by `output_y_range`, with its y
/// axis pointing south. `center` is the view-box point that lands on the
/// scene origin and `scale` is scene units per view-box unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Longitude span (west, east) mapped onto `output_x_range`
    pub lng_range: (f64, f64),
    /// Latitude span (south, north) mapped onto `output_y_range`
    pub lat_range: (f64, f64),
    /// View-box x range
    pub output_x_range: (f64, f64),
    /// View-box y range (north = low y)
    pub output_y_range: (f64, f64),
    /// View-box point placed at the scene origin
    pub center: (f64, f64),
    /// Scene units per view-box unit
    pub scale: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            // Greece bounding box
            lng_range: (19.3, 29.6),
            lat_range: (34.7, 41.8),
            output_x_range: (-5.0, 80.0),
            output_y_range: (-5.0, 85.0),
            // x sits left of the geometric centre (37.5) so the dots shift right
            center: (30.0, 40.0),
            // Tuned to a camera distance of 22
            scale: 0.155,
        }
    }
}

impl ProjectionConfig {
    /// Maps a geographic position into view-box space, before centering.
    ///
    /// No clamping: coordinates outside the configured ranges extrapolate
    /// linearly and end up outside the view box.
    pub fn to_map_space(&self, lat: f64, lng: f64) -> (f64, f64) {
        let (lng0, lng1) = self.lng_range;
        let (lat0, lat1) = self.lat_range;
        let (x0, x1) = self.output_x_range;
        let (y0, y1) = self.output_y_range;

        let map_x = x0 + (lng - lng0) / (lng1 - lng0) * (x1 - x0);
        let map_y = y0 + (1.0 - (lat - lat0) / (lat1 - lat0)) * (y1 - y0);

        (map_x, map_y)
    }

    /// Projects a geographic position into scene units.
    pub fn project(&self, lat: f64, lng: f64) -> ScenePosition {
        let (map_x, map_y) = self.to_map_space(lat, lng);
        let (cx, cy) = self.center;

        ScenePosition {
            x: (map_x - cx) * self.scale,
            // Flip Y since view-box Y increases southward
            y: -(map_y - cy) * self.scale,
        }
    }

    /// Projects a `(lon, lat)` coordinate into scene units.
    pub fn project_coord(&self, coord: Coord<f64>) -> ScenePosition {
        self.project(coord.y, coord.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_project_is_deterministic() {
        let config = ProjectionConfig::default();
        for &(lat, lng) in &[(37.98, 23.73), (40.58, 22.97), (10.0, -3.0)] {
            let a = config.project(lat, lng);
            let b = config.project(lat, lng);
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn test_bounding_box_corners() {
        let config = ProjectionConfig::default();

        // North-west corner -> view-box top-left
        let (x, y) = config.to_map_space(41.8, 19.3);
        assert!(approx(x, -5.0) && approx(y, -5.0), "got ({x}, {y})");

        // South-east corner -> view-box bottom-right
        let (x, y) = config.to_map_space(34.7, 29.6);
        assert!(approx(x, 80.0) && approx(y, 85.0), "got ({x}, {y})");

        // South-west corner -> bottom-left
        let (x, y) = config.to_map_space(34.7, 19.3);
        assert!(approx(x, -5.0) && approx(y, 85.0), "got ({x}, {y})");

        // North-east corner -> top-right
        let (x, y) = config.to_map_space(41.8, 29.6);
        assert!(approx(x, 80.0) && approx(y, -5.0), "got ({x}, {y})");
    }

    #[test]
    fn test_monotonic_axes() {
        let config = ProjectionConfig::default();

        let mut last_x = f64::NEG_INFINITY;
        for step in 0..=20 {
            let lng = 19.3 + step as f64 * 0.5;
            let (x, _) = config.to_map_space(38.0, lng);
            assert!(x > last_x);
            last_x = x;
        }

        let mut last_y = f64::INFINITY;
        for step in 0..=14 {
            let lat = 34.7 + step as f64 * 0.5;
            let (_, y) = config.to_map_space(lat, 24.0);
            assert!(y < last_y);
            last_y = y;
        }
    }

    #[test]
    fn test_athens_projection() {
        let config = ProjectionConfig::default();
        let pos = config.project(37.98, 23.73);

        // mx = -5 + 4.43 / 10.3 * 85, my = -5 + (1 - 3.28 / 7.1) * 90
        let expected_x = (-5.0 + 4.43 / 10.3 * 85.0 - 30.0) * 0.155;
        let expected_y = -(-5.0 + (1.0 - 3.28 / 7.1) * 90.0 - 40.0) * 0.155;

        assert!((pos.x - expected_x).abs() < 1e-6);
        assert!((pos.y - expected_y).abs() < 1e-6);
        assert!((pos.x - 0.2415).abs() < 1e-3);
        assert!((pos.y + 0.5305).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let config = ProjectionConfig::default();
        let (x, y) = config.to_map_space(50.0, 40.0);
        assert!(x > 80.0);
        assert!(y < -5.0);
    }

    #[test]
    fn test_project_coord_uses_lon_lat_order() {
        let config = ProjectionConfig::default();
        let a = config.project(38.25, 21.73);
        let b = config.project_coord(Coord { x: 21.73, y: 38.25 });
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_config_json_uses_defaults() {
        let config: ProjectionConfig = serde_json::from_str(r#"{"scale": 0.2}"#).unwrap();
        assert_eq!(config.scale, 0.2);
        assert_eq!(config.center, (30.0, 40.0));
    }
}
