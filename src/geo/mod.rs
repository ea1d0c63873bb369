//! Geographic data for the hero map.
//!
//! This module provides the compiled-in location list and the projection
//! that aligns geographic coordinates with the background map.

mod points;
mod projection;

pub use points::{GeoPoint, GREECE_LOCATIONS};
pub use projection::{ProjectionConfig, ScenePosition};
