//! Raw input fragment as supplied by the external geometry extractor.

use serde::{Deserialize, Serialize};

use super::{Point, Polyline};

/// One polyline fragment extracted from a drawing's road layers.
///
/// `width` is the extractor's average of the entity's per-vertex start/end
/// width attributes in drawing units; absent or zero means the drawing did
/// not encode a width for this fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSegment {
    /// Ordered vertex sequence.
    pub points: Vec<Point>,
    /// Average explicit width attribute, if the entity carried one.
    #[serde(default)]
    pub width: Option<f64>,
}

impl RawSegment {
    /// Create a segment without an explicit width.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            width: None,
        }
    }

    /// Create a segment carrying an explicit width attribute.
    pub fn with_width(points: Vec<Point>, width: f64) -> Self {
        Self {
            points,
            width: Some(width),
        }
    }

    /// The explicit width, if present and positive.
    pub fn explicit_width(&self) -> Option<f64> {
        self.width.filter(|w| *w > 0.0)
    }

    /// Raw length of the fragment's point sequence.
    pub fn raw_length(&self) -> f64 {
        self.polyline().length()
    }

    /// View the fragment as a polyline.
    pub fn polyline(&self) -> Polyline {
        Polyline::new(self.points.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_width_filters_zero() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(RawSegment::new(points.clone()).explicit_width(), None);
        assert_eq!(
            RawSegment::with_width(points.clone(), 0.0).explicit_width(),
            None
        );
        assert_eq!(
            RawSegment::with_width(points, 2.5).explicit_width(),
            Some(2.5)
        );
    }

    #[test]
    fn test_raw_length() {
        let seg = RawSegment::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 8.0)]);
        assert!((seg.raw_length() - 8.0).abs() < 0.001);
    }
}
