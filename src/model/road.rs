//! Final road record emitted by the pipeline.

use serde::{Deserialize, Serialize};

use super::Point;

/// How a road's width was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WidthSource {
    /// Global average of the batch's explicit width attributes.
    Explicit,
    /// Sampled gap to the nearest bearing-compatible neighboring road.
    ParallelEdge,
    /// No estimate could be derived; width is reported as zero.
    #[default]
    Unresolved,
}

/// One reconstructed road corridor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Road {
    /// 1-based position in the output.
    pub index: u32,
    /// First point of the corridor's point sequence.
    pub start: Point,
    /// Last point of the corridor's point sequence.
    pub end: Point,
    /// Corridor length in drawing units.
    pub length_units: f64,
    /// Corridor length converted via the configured unit scale.
    pub length_m: f64,
    /// Estimated corridor width in drawing units (zero when unresolved).
    pub width_units: f64,
    /// Estimated width converted via the configured unit scale.
    pub width_m: f64,
    /// Where the width estimate came from.
    pub width_source: WidthSource,
    /// The corridor's underlying point sequence.
    pub points: Vec<Point>,
}

impl Road {
    /// Whether no width estimate could be derived for this road.
    pub fn is_width_unresolved(&self) -> bool {
        self.width_source == WidthSource::Unresolved
    }
}
