//! Planar point in drawing units.

use serde::{Deserialize, Serialize};

use crate::config::angle;

/// An (x, y) coordinate in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bearing from this point to another, in degrees normalized to 0-360.
    pub fn bearing_to(&self, other: Point) -> f64 {
        let degrees = (other.y - self.y).atan2(other.x - self.x).to_degrees();
        angle::normalize_degrees(degrees)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
