//! Validation logic for pipeline configuration and input batches.

use crate::config::PipelineConfig;
use crate::model::RawSegment;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate pipeline thresholds.
pub fn validate_config(config: &PipelineConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if config.merge_tolerance < 0.0 {
        result.add_error(format!(
            "merge_tolerance must be non-negative, got {}",
            config.merge_tolerance
        ));
    }

    if config.cluster_distance < 0.0 {
        result.add_error(format!(
            "cluster_distance must be non-negative, got {}",
            config.cluster_distance
        ));
    }

    // Clustering is intended as a coarser grouping than merging.
    if config.cluster_distance < config.merge_tolerance {
        result.add_warning(format!(
            "cluster_distance ({}) is smaller than merge_tolerance ({})",
            config.cluster_distance, config.merge_tolerance
        ));
    }

    if config.parallel_angle_tolerance < 0.0 || config.parallel_angle_tolerance > 180.0 {
        result.add_error(format!(
            "parallel_angle_tolerance must be within 0-180 degrees, got {}",
            config.parallel_angle_tolerance
        ));
    }

    if config.width_samples == 0 {
        result.add_error("width_samples must be at least 1");
    }

    if config.unit_scale <= 0.0 {
        result.add_warning(format!(
            "unit_scale ({}) is not positive; converted lengths will be meaningless",
            config.unit_scale
        ));
    }

    result
}

/// Validate a configuration together with its input batch.
///
/// Combined entry point for validate-only runs: configuration errors fail
/// the result, batch degeneracies stay warnings.
pub fn validate_run(config: &PipelineConfig, segments: &[RawSegment]) -> ValidationResult {
    let mut result = validate_config(config);
    result.merge(validate_segments(segments));
    result
}

/// Validate an input batch, reporting degenerate entries as warnings.
///
/// Degenerate segments never abort a run (the pipeline skips and counts
/// them); this exists so callers can surface them before processing.
pub fn validate_segments(segments: &[RawSegment]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if segments.is_empty() {
        result.add_warning("segment batch is empty");
        return result;
    }

    for (i, segment) in segments.iter().enumerate() {
        if segment.points.len() < 2 {
            result.add_warning(format!(
                "segment {}: fewer than 2 points, will be skipped",
                i + 1
            ));
        }
        if let Some(width) = segment.width {
            if width < 0.0 {
                result.add_warning(format!(
                    "segment {}: negative explicit width {} ignored",
                    i + 1,
                    width
                ));
            }
        }
    }

    result
}
