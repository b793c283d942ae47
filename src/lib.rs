//! roadtrace - Reconstruct road corridors from scattered CAD polyline fragments.
//!
//! Takes the disconnected line/polyline fragments an external extractor pulls
//! off a drawing's road layers and turns them into a small number of
//! continuous road corridors with estimated length and width: touching
//! fragments are stitched into paths, nearby paths are grouped into
//! corridors, and widths come from explicit width attributes when the
//! drawing has them or from the gap to the nearest parallel corridor when
//! it does not.
//!
//! The whole pipeline is synchronous, in-memory batch computation with no
//! shared state between runs; every phase is O(n^2), sized for corridor
//! counts in the hundreds. Drawing I/O, layer handling and unit calibration
//! live outside this crate.
//!
//! # Example
//!
//! ```
//! use roadtrace::{analyze_roads, PipelineConfig, Point, RawSegment};
//!
//! let batch = vec![
//!     RawSegment::new(vec![Point::new(0.0, 0.0), Point::new(120.0, 0.0)]),
//!     RawSegment::new(vec![Point::new(120.0, 0.0), Point::new(240.0, 5.0)]),
//! ];
//! let report = analyze_roads(&batch, &PipelineConfig::default()).unwrap();
//! for road in &report.roads {
//!     println!("Road {}: {:.2} units long", road.index, road.length_units);
//! }
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod transform;
pub mod validation;
pub mod width;

// Re-exports for convenience
pub use batch::{load_segments, parse_segments};
pub use config::PipelineConfig;
pub use error::{Result, TraceError};
pub use model::{Point, Polyline, RawSegment, Road, WidthSource};
pub use pipeline::{trace_roads, RoadReport};
pub use transform::{cluster_paths, merge_fragments};
pub use validation::{validate_config, validate_run, validate_segments, ValidationResult};

/// Validate the configuration, then run the reconstruction pipeline.
///
/// This is the main high-level entry point:
/// 1. Check the configured thresholds
/// 2. Surface degenerate-batch warnings through `tracing`
/// 3. Run merge, cluster, filter, and measurement
///
/// Only an invalid configuration is an error; everything inside the
/// pipeline degrades to a usable partial result (see [`pipeline::trace_roads`]).
pub fn analyze_roads(segments: &[RawSegment], config: &PipelineConfig) -> Result<RoadReport> {
    let validation = validate_config(config);
    if !validation.passed {
        return Err(TraceError::InvalidConfig {
            message: validation.errors.join("; "),
        });
    }
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    for warning in &validate_segments(segments).warnings {
        tracing::warn!("{}", warning);
    }

    Ok(trace_roads(segments, config))
}
