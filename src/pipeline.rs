//! Pipeline orchestrator: raw fragments in, measured roads out.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::model::{Polyline, RawSegment, Road, WidthSource};
use crate::transform::{cluster_paths, merge_fragments};
use crate::width::find_parallel_edge;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadReport {
    /// Final measured roads, in encounter order, indexed from 1.
    pub roads: Vec<Road>,
    /// Fragments dropped before merging (too few points or too short).
    pub skipped_segments: usize,
    /// Number of paths after the merge phase.
    pub merged_paths: usize,
    /// Number of corridors after the cluster phase, before filtering.
    pub corridors: usize,
}

/// Run the full reconstruction pipeline over one batch of fragments.
///
/// Extraction happens upstream; this consumes the extractor's output and
/// sequences merge, cluster, filter, truncate, and measurement. The batch
/// is processed atomically and the function holds no state across calls;
/// independent batches may run on separate threads. All phases are O(n^2)
/// over the surviving fragment count, so the intended scale is corridor
/// counts in the hundreds, not tens of thousands.
///
/// There are no fatal conditions: degenerate fragments are counted and
/// skipped, an empty batch yields an empty report, and roads without a
/// derivable width come back flagged [`WidthSource::Unresolved`].
pub fn trace_roads(segments: &[RawSegment], config: &PipelineConfig) -> RoadReport {
    if segments.is_empty() {
        warn!("empty segment batch, nothing to reconstruct");
        return RoadReport {
            roads: Vec::new(),
            skipped_segments: 0,
            merged_paths: 0,
            corridors: 0,
        };
    }

    // Step 1: drop degenerate fragments, keeping a skip count for the caller.
    let mut fragments: Vec<Polyline> = Vec::with_capacity(segments.len());
    let mut skipped = 0usize;
    for (i, segment) in segments.iter().enumerate() {
        if segment.points.len() < 2 {
            debug!("skipping segment {i}: fewer than 2 points");
            skipped += 1;
            continue;
        }
        if segment.raw_length() <= config.min_segment_length {
            debug!("skipping segment {i}: raw length below threshold");
            skipped += 1;
            continue;
        }
        fragments.push(segment.polyline());
    }
    info!(
        "accepted {} of {} fragments ({} skipped)",
        fragments.len(),
        segments.len(),
        skipped
    );

    // Global average of the batch's explicit widths, when the drawing
    // encodes width directly. Coarse but stable; applied to every road.
    let explicit_widths: Vec<f64> = segments
        .iter()
        .filter_map(RawSegment::explicit_width)
        .collect();
    let global_avg_width = if explicit_widths.is_empty() {
        0.0
    } else {
        explicit_widths.iter().sum::<f64>() / explicit_widths.len() as f64
    };

    // Steps 2-3: merge touching fragments, then group nearby paths.
    let merged = merge_fragments(fragments, config.merge_tolerance);
    let merged_count = merged.len();
    info!("merged into {} road segments", merged_count);

    let clustered = cluster_paths(merged, config.cluster_distance, config.merge_tolerance);
    info!("clustered into {} corridors", clustered.len());

    // Steps 4-5: drop short corridors, cap the output count.
    let final_corridors: Vec<Polyline> = clustered
        .iter()
        .filter(|c| c.length() > config.min_road_length)
        .take(config.max_roads)
        .cloned()
        .collect();
    info!(
        "filtered to {} final roads with length > {} units",
        final_corridors.len(),
        config.min_road_length
    );

    // Step 6: measure each surviving corridor against the final set.
    let roads = final_corridors
        .iter()
        .enumerate()
        .map(|(i, corridor)| {
            let (width_units, width_source) = if global_avg_width > 0.0 {
                (global_avg_width, WidthSource::Explicit)
            } else {
                match find_parallel_edge(
                    i,
                    &final_corridors,
                    config.parallel_angle_tolerance,
                    config.width_samples,
                ) {
                    Some((_, distance)) => (distance, WidthSource::ParallelEdge),
                    None => {
                        debug!("road {}: no parallel edge, width unresolved", i + 1);
                        (0.0, WidthSource::Unresolved)
                    }
                }
            };

            let length_units = corridor.length();
            // Corridors that passed the length filter have at least two points.
            let start = corridor.first().unwrap_or_default();
            let end = corridor.last().unwrap_or_default();

            Road {
                index: (i + 1) as u32,
                start,
                end,
                length_units,
                length_m: config.to_meters(length_units),
                width_units,
                width_m: config.to_meters(width_units),
                width_source,
                points: corridor.points.clone(),
            }
        })
        .collect();

    RoadReport {
        roads,
        skipped_segments: skipped,
        merged_paths: merged_count,
        corridors: clustered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use pretty_assertions::assert_eq;

    fn segment(points: &[(f64, f64)]) -> RawSegment {
        RawSegment::new(points.iter().map(|&p| Point::from(p)).collect())
    }

    fn test_config() -> PipelineConfig {
        PipelineConfig {
            min_segment_length: 0.5,
            min_road_length: 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_batch_yields_empty_report() {
        let report = trace_roads(&[], &PipelineConfig::default());
        assert!(report.roads.is_empty());
        assert_eq!(report.skipped_segments, 0);
    }

    #[test]
    fn test_degenerate_segments_are_counted_not_fatal() {
        let batch = vec![
            segment(&[(0.0, 0.0)]),                // too few points
            segment(&[(0.0, 0.0), (0.1, 0.0)]),    // too short
            segment(&[(0.0, 0.0), (100.0, 0.0)]),  // fine
        ];
        let report = trace_roads(&batch, &test_config());
        assert_eq!(report.skipped_segments, 2);
        assert_eq!(report.roads.len(), 1);
    }

    #[test]
    fn test_explicit_width_global_average() {
        let batch = vec![
            RawSegment::with_width(
                vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
                4.0,
            ),
            RawSegment::with_width(
                vec![Point::new(0.0, 50.0), Point::new(100.0, 50.0)],
                6.0,
            ),
        ];
        let report = trace_roads(&batch, &test_config());
        assert_eq!(report.roads.len(), 2);
        for road in &report.roads {
            assert_eq!(road.width_source, WidthSource::Explicit);
            assert!((road.width_units - 5.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_road_indices_start_at_one() {
        let batch = vec![
            segment(&[(0.0, 0.0), (100.0, 0.0)]),
            segment(&[(0.0, 500.0), (100.0, 500.0)]),
        ];
        let report = trace_roads(&batch, &test_config());
        let indices: Vec<u32> = report.roads.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_length_conversion_uses_unit_scale() {
        let config = PipelineConfig {
            unit_scale: 0.3048,
            ..test_config()
        };
        let batch = vec![segment(&[(0.0, 0.0), (100.0, 0.0)])];
        let report = trace_roads(&batch, &config);
        let road = &report.roads[0];
        assert!((road.length_units - 100.0).abs() < 0.001);
        assert!((road.length_m - 30.48).abs() < 0.001);
    }
}
