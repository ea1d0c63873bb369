//! Compiled-in location list for the hero map.

use geo_types::Coord;

/// A named location drawn as a marker on the hero map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Core dot radius in scene units; every other marker layer scales from it
    pub display_size: f32,
    /// Major hubs get a brighter color and an extra outer ring
    pub is_major: bool,
}

impl GeoPoint {
    const fn new(
        name: &'static str,
        latitude: f64,
        longitude: f64,
        display_size: f32,
        is_major: bool,
    ) -> Self {
        Self {
            name,
            latitude,
            longitude,
            display_size,
            is_major,
        }
    }

    /// Returns the location as a `(lon, lat)` coordinate.
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

/// Service locations, major hubs first.
pub static GREECE_LOCATIONS: &[GeoPoint] = &[
    // Major hubs
    GeoPoint::new("Αθήνα", 37.98, 23.73, 0.17, true),
    GeoPoint::new("Θεσσαλονίκη", 40.58, 22.97, 0.15, true),
    GeoPoint::new("Ηράκλειο", 35.34, 25.14, 0.14, true),
    GeoPoint::new("Πάτρα", 38.25, 21.73, 0.13, true),
    GeoPoint::new("Ρόδος", 36.43, 28.22, 0.12, true),
    // Mainland
    GeoPoint::new("Ιωάννινα", 39.66, 20.85, 0.09, false),
    GeoPoint::new("Κοζάνη", 40.30, 21.79, 0.09, false),
    GeoPoint::new("Λάρισα", 39.64, 22.42, 0.10, false),
    GeoPoint::new("Βόλος", 39.37, 22.95, 0.09, false),
    GeoPoint::new("Καβάλα", 40.94, 24.40, 0.09, false),
    GeoPoint::new("Αλεξανδρούπολη", 40.85, 25.87, 0.08, false),
    GeoPoint::new("Λαμία", 38.90, 22.43, 0.08, false),
    GeoPoint::new("Άγρινιο", 38.62, 21.41, 0.08, false),
    GeoPoint::new("Τρίπολη", 37.51, 22.38, 0.08, false),
    GeoPoint::new("Καλαμάτα", 37.04, 22.11, 0.08, false),
    // Ionian
    GeoPoint::new("Κέρκυρα", 39.62, 19.92, 0.10, false),
    GeoPoint::new("Λευκάδα", 38.83, 20.71, 0.08, false),
    GeoPoint::new("Κεφαλονιά", 38.18, 20.45, 0.09, false),
    GeoPoint::new("Ζάκυνθος", 37.65, 20.90, 0.09, false),
    // Cyclades
    GeoPoint::new("Άνδρος", 37.83, 24.90, 0.08, false),
    GeoPoint::new("Σύρος", 37.45, 24.94, 0.08, false),
    GeoPoint::new("Μύκονος", 37.45, 25.33, 0.10, false),
    GeoPoint::new("Νάξος", 37.05, 25.38, 0.09, false),
    GeoPoint::new("Πάρος", 37.09, 25.12, 0.08, false),
    GeoPoint::new("Μήλος", 36.72, 24.42, 0.08, false),
    GeoPoint::new("Σαντορίνη", 36.39, 25.46, 0.10, false),
    GeoPoint::new("Αμοργός", 36.83, 25.90, 0.08, false),
    GeoPoint::new("Κέα", 37.64, 24.20, 0.07, false),
    GeoPoint::new("Σίφνος", 36.97, 24.73, 0.07, false),
    // North-east Aegean
    GeoPoint::new("Θάσος", 40.69, 24.70, 0.08, false),
    GeoPoint::new("Λήμνος", 39.91, 25.35, 0.08, false),
    GeoPoint::new("Λέσβος", 39.10, 26.30, 0.10, false),
    GeoPoint::new("Χίος", 38.37, 26.07, 0.09, false),
    GeoPoint::new("Ικαρία", 37.60, 26.17, 0.07, false),
    GeoPoint::new("Σάμος", 37.75, 26.85, 0.09, false),
    // Sporades
    GeoPoint::new("Σκιάθος", 39.16, 23.49, 0.08, false),
    GeoPoint::new("Σκόπελος", 39.08, 23.78, 0.07, false),
    // Dodecanese
    GeoPoint::new("Πάτμος", 37.32, 26.55, 0.08, false),
    GeoPoint::new("Κως", 36.89, 27.10, 0.09, false),
    GeoPoint::new("Νίσυρος", 36.59, 27.17, 0.07, false),
    // Saronic
    GeoPoint::new("Αίγινα", 37.75, 23.43, 0.08, false),
    GeoPoint::new("Ύδρα", 37.35, 23.46, 0.07, false),
    GeoPoint::new("Σπέτσες", 37.26, 23.10, 0.07, false),
    // Crete
    GeoPoint::new("Χανιά", 35.51, 24.02, 0.10, false),
    GeoPoint::new("Ρέθυμνο", 35.37, 24.47, 0.08, false),
    GeoPoint::new("Άγιος Νικόλαος", 35.19, 25.72, 0.08, false),
    GeoPoint::new("Σητεία", 35.21, 26.10, 0.07, false),
];
