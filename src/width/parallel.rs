//! Parallel-edge width estimation.
//!
//! Roads in the source drawings are usually drawn as two near-parallel
//! boundary lines. When no explicit width attribute exists, the gap to the
//! nearest bearing-compatible neighboring road stands in for the corridor
//! width.

use crate::config::angle;
use crate::model::Polyline;

/// Average over equal-arc-length stations along `target` of the minimum
/// distance to any vertex of `other`.
///
/// The station walk advances whole segments and samples at the vertex
/// reached, so stations snap to `target`'s vertices. Nearest-vertex (not
/// nearest-point-on-segment) distance is a deliberate simplification that
/// holds up when candidate roads are densely sampled polylines. Returns 0
/// when either polyline is empty, `target` has zero length, or `samples`
/// is zero.
pub fn average_sampled_distance(target: &Polyline, other: &Polyline, samples: usize) -> f64 {
    if target.is_empty() || other.is_empty() || samples == 0 {
        return 0.0;
    }

    let total_len = target.length();
    if total_len == 0.0 {
        return 0.0;
    }

    let step = total_len / samples as f64;
    let mut seg_index = 0;
    let mut acc_len = 0.0;
    let mut station = target.points[0];
    let mut sum = 0.0;

    for s in 0..samples {
        let target_len = step * (s + 1) as f64;
        while seg_index < target.len() - 1 && acc_len < target_len {
            acc_len += target.points[seg_index].distance_to(target.points[seg_index + 1]);
            seg_index += 1;
            station = target.points[seg_index];
        }

        let min_d = other
            .points
            .iter()
            .map(|q| station.distance_to(*q))
            .fold(f64::MAX, f64::min);
        sum += min_d;
    }

    sum / samples as f64
}

/// Find the road nearest to `roads[target_idx]` among those with a similar
/// overall bearing.
///
/// Candidates are the other entries of `roads` whose first-to-last bearing
/// differs from the target's by at most `angle_tolerance` degrees. The
/// candidate minimizing the positive average sampled distance wins; zero
/// averages are excluded since they indicate self-comparison or a
/// degenerate overlap. Returns the winning index and its average distance,
/// or `None` when no candidate qualifies.
pub fn find_parallel_edge(
    target_idx: usize,
    roads: &[Polyline],
    angle_tolerance: f64,
    samples: usize,
) -> Option<(usize, f64)> {
    let target = roads.get(target_idx)?;
    let main_bearing = target.bearing()?;

    let mut closest: Option<(usize, f64)> = None;

    for (i, other) in roads.iter().enumerate() {
        if i == target_idx {
            continue;
        }
        let other_bearing = match other.bearing() {
            Some(b) => b,
            None => continue,
        };
        if angle::difference_degrees(main_bearing, other_bearing) > angle_tolerance {
            continue;
        }

        let avg_d = average_sampled_distance(target, other, samples);
        if avg_d > 0.0 && closest.map_or(true, |(_, best)| avg_d < best) {
            closest = Some((i, avg_d));
        }
    }

    closest
}
