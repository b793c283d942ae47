//! Configuration constants and settings for road reconstruction.

/// Default endpoint distance below which two fragments are stitched (drawing units).
pub const DEFAULT_MERGE_TOLERANCE: f64 = 0.2;

/// Default endpoint distance below which two merged paths are grouped
/// into one corridor (drawing units).
pub const DEFAULT_CLUSTER_DISTANCE: f64 = 10.0;

/// Default bearing difference (degrees) under which two roads count as parallel.
pub const DEFAULT_PARALLEL_ANGLE_TOLERANCE: f64 = 60.0;

/// Default minimum raw fragment length; shorter fragments are noise (drawing units).
pub const DEFAULT_MIN_SEGMENT_LENGTH: f64 = 10.0;

/// Default minimum corridor length to survive the final filter (drawing units).
pub const DEFAULT_MIN_ROAD_LENGTH: f64 = 30.0;

/// Default cap on the number of emitted roads.
pub const DEFAULT_MAX_ROADS: usize = 15;

/// Default number of arc-length stations sampled during width estimation.
pub const DEFAULT_WIDTH_SAMPLES: usize = 10;

/// Conversion factor: feet to meters (common survey drawing unit).
pub const FEET_TO_METERS: f64 = 0.3048;

use serde::{Deserialize, Serialize};

/// Thresholds applied by the reconstruction pipeline.
///
/// Defaults come from the survey drawings this tool was calibrated on;
/// all values are in drawing units unless noted otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Endpoint distance under which two fragments are considered one path.
    pub merge_tolerance: f64,
    /// Endpoint distance under which two merged paths form one corridor.
    pub cluster_distance: f64,
    /// Maximum bearing difference (degrees) for the parallel-edge width search.
    pub parallel_angle_tolerance: f64,
    /// Fragments with raw length at or below this are skipped as noise.
    pub min_segment_length: f64,
    /// Corridors with total length at or below this are dropped.
    pub min_road_length: f64,
    /// At most this many roads are emitted, in encounter order.
    pub max_roads: usize,
    /// Stations sampled along a road when estimating width from a parallel edge.
    pub width_samples: usize,
    /// Multiplier from drawing units to meters (1.0 leaves values unconverted).
    pub unit_scale: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
            cluster_distance: DEFAULT_CLUSTER_DISTANCE,
            parallel_angle_tolerance: DEFAULT_PARALLEL_ANGLE_TOLERANCE,
            min_segment_length: DEFAULT_MIN_SEGMENT_LENGTH,
            min_road_length: DEFAULT_MIN_ROAD_LENGTH,
            max_roads: DEFAULT_MAX_ROADS,
            width_samples: DEFAULT_WIDTH_SAMPLES,
            unit_scale: 1.0,
        }
    }
}

impl PipelineConfig {
    /// Convert a length in drawing units to meters using the configured scale.
    pub fn to_meters(&self, units: f64) -> f64 {
        units * self.unit_scale
    }
}

/// Utility functions for angle operations.
pub mod angle {
    /// Normalize angle to 0-360 range (exclusive of 360).
    #[inline]
    pub fn normalize_degrees(angle: f64) -> f64 {
        let mut a = angle % 360.0;
        if a < 0.0 {
            a += 360.0;
        }
        // Handle 360.0 and -0.0 cases
        if a >= 360.0 || a == 0.0 {
            a = 0.0;
        }
        a
    }

    /// Smallest absolute difference between two bearings, in [0, 180].
    #[inline]
    pub fn difference_degrees(a1: f64, a2: f64) -> f64 {
        let diff = (a1 - a2).abs() % 360.0;
        if diff > 180.0 {
            360.0 - diff
        } else {
            diff
        }
    }
}
