//! Open polyline made of ordered points.

use serde::{Deserialize, Serialize};

use super::Point;

/// An ordered, open sequence of points.
///
/// Represents one raw fragment, one merged path, or one corridor's point set.
/// Corridor point sets produced by clustering are not guaranteed to be a
/// clean single traversal; length is still computed in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    /// Create a polyline from a point sequence.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polyline has too few points to define a path.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// First point, if any.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last point, if any.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Total length: sum of consecutive point distances.
    ///
    /// Always recomputed from the current point sequence; zero for fewer
    /// than two points.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum()
    }

    /// Overall bearing from the first point to the last, in degrees.
    ///
    /// `None` for degenerate polylines.
    pub fn bearing(&self) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(self.points[0].bearing_to(self.points[self.points.len() - 1]))
    }

    /// A copy with the point order reversed.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Whether any point lies within `tolerance` of `candidate`.
    ///
    /// A non-positive tolerance falls back to exact comparison.
    pub fn contains_point(&self, candidate: Point, tolerance: f64) -> bool {
        if tolerance <= 0.0 {
            self.points.iter().any(|p| *p == candidate)
        } else {
            self.points
                .iter()
                .any(|p| p.distance_to(candidate) < tolerance)
        }
    }
}
