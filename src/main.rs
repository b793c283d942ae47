//! roadtrace - CLI for reconstructing road corridors from extracted fragments.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use roadtrace::config::FEET_TO_METERS;
use roadtrace::{analyze_roads, load_segments, validate_run, PipelineConfig};

/// Reconstruct road corridors from a JSON batch of polyline fragments.
#[derive(Parser, Debug)]
#[command(name = "roadtrace")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input JSON file: array of {"points": [{"x":..,"y":..},..], "width": ..}
    #[arg(short, long)]
    input: PathBuf,

    /// Write the full report as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Endpoint distance for stitching fragments (drawing units)
    #[arg(long, default_value_t = roadtrace::config::DEFAULT_MERGE_TOLERANCE)]
    merge_tolerance: f64,

    /// Endpoint distance for grouping paths into corridors (drawing units)
    #[arg(long, default_value_t = roadtrace::config::DEFAULT_CLUSTER_DISTANCE)]
    cluster_distance: f64,

    /// Bearing tolerance for the parallel-edge width search (degrees)
    #[arg(long, default_value_t = roadtrace::config::DEFAULT_PARALLEL_ANGLE_TOLERANCE)]
    angle_tolerance: f64,

    /// Minimum raw fragment length; shorter fragments are skipped
    #[arg(long, default_value_t = roadtrace::config::DEFAULT_MIN_SEGMENT_LENGTH)]
    min_segment_length: f64,

    /// Minimum corridor length to count as a road
    #[arg(long, default_value_t = roadtrace::config::DEFAULT_MIN_ROAD_LENGTH)]
    min_road_length: f64,

    /// Maximum number of roads to emit
    #[arg(long, default_value_t = roadtrace::config::DEFAULT_MAX_ROADS)]
    max_roads: usize,

    /// Stations sampled per road during width estimation
    #[arg(long, default_value_t = roadtrace::config::DEFAULT_WIDTH_SAMPLES)]
    width_samples: usize,

    /// Multiplier from drawing units to meters
    #[arg(long, default_value = "1.0", conflicts_with = "feet")]
    scale: f64,

    /// Treat drawing units as feet (shorthand for the feet-to-meters scale)
    #[arg(long)]
    feet: bool,

    /// Validate the batch and configuration, don't reconstruct
    #[arg(long)]
    validate: bool,

    /// Print the report as JSON instead of the road table
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn unit_scale(&self) -> f64 {
        if self.feet {
            FEET_TO_METERS
        } else {
            self.scale
        }
    }

    fn to_config(&self) -> PipelineConfig {
        PipelineConfig {
            merge_tolerance: self.merge_tolerance,
            cluster_distance: self.cluster_distance,
            parallel_angle_tolerance: self.angle_tolerance,
            min_segment_length: self.min_segment_length,
            min_road_length: self.min_road_length,
            max_roads: self.max_roads,
            width_samples: self.width_samples,
            unit_scale: self.unit_scale(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = args.to_config();

    info!("Processing: {}", args.input.display());

    let segments = load_segments(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!("Loaded {} segment(s)", segments.len());

    // Validate-only mode: check the configuration and the batch.
    if args.validate {
        let result = validate_run(&config, &segments);
        for warning in &result.warnings {
            warn!("{}", warning);
        }
        for err in &result.errors {
            error!("{}", err);
        }
        if !result.passed {
            anyhow::bail!("Validation failed");
        }
        info!("Validation passed");
        return Ok(());
    }

    let report = analyze_roads(&segments, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for road in &report.roads {
            println!(
                "Road {}: Start ({:.2}, {:.2}), End ({:.2}, {:.2}), \
                 Length {:.2} units ({:.2} m), Width {:.2} units ({:.2} m){}",
                road.index,
                road.start.x,
                road.start.y,
                road.end.x,
                road.end.y,
                road.length_units,
                road.length_m,
                road.width_units,
                road.width_m,
                if road.is_width_unresolved() {
                    " [width unresolved]"
                } else {
                    ""
                }
            );
        }
        if report.roads.is_empty() {
            println!(
                "No roads passed the size filters. Try loosening the thresholds."
            );
        }
    }

    if let Some(output_path) = args.output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Report written: {}", output_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_flag_sets_scale() {
        let args = Args::try_parse_from(["roadtrace", "--input", "batch.json", "--feet"]).unwrap();
        assert_eq!(args.unit_scale(), FEET_TO_METERS);
        assert_eq!(args.to_config().unit_scale, FEET_TO_METERS);
    }

    #[test]
    fn test_explicit_scale_passes_through() {
        let args =
            Args::try_parse_from(["roadtrace", "--input", "batch.json", "--scale", "0.5"]).unwrap();
        assert_eq!(args.unit_scale(), 0.5);
    }

    #[test]
    fn test_feet_conflicts_with_scale() {
        let result = Args::try_parse_from([
            "roadtrace",
            "--input",
            "batch.json",
            "--feet",
            "--scale",
            "0.5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_run_catches_bad_cli_thresholds() {
        let args = Args::try_parse_from([
            "roadtrace",
            "--input",
            "batch.json",
            "--merge-tolerance=-5",
        ])
        .unwrap();
        let result = validate_run(&args.to_config(), &[]);
        assert!(!result.passed);
    }
}
