//! Fragment merging: stitch touching polylines into continuous paths.

use crate::model::{Point, Polyline};

/// Stitch polylines whose endpoints coincide within `tolerance` into
/// longer paths.
///
/// Greedy first-match chain growth over the endpoint proximity relation:
/// each accumulator absorbs matching fragments until none of its endpoints
/// is within `tolerance` of any remaining fragment's endpoints. Every input
/// point ends up in exactly one output path; which path wins at a junction
/// of three or more fragments depends on input order. Not a topology
/// solver, and O(n^2), so intended for fragment counts in the hundreds.
///
/// Polylines with fewer than two points are non-mergeable and pass through
/// as their own path.
pub fn merge_fragments(fragments: Vec<Polyline>, tolerance: f64) -> Vec<Polyline> {
    let mut pool = fragments;
    let mut consumed = vec![false; pool.len()];
    let mut merged: Vec<Polyline> = Vec::with_capacity(pool.len());

    for start in 0..pool.len() {
        if consumed[start] {
            continue;
        }
        consumed[start] = true;
        let mut current = std::mem::take(&mut pool[start]);

        // Rescan after every splice; the accumulator's endpoints changed.
        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..pool.len() {
                if consumed[i] {
                    continue;
                }
                if splice(&mut current, &pool[i], tolerance) {
                    consumed[i] = true;
                    changed = true;
                    break;
                }
            }
        }

        merged.push(current);
    }

    merged
}

/// Try to splice `other` onto either end of `current`.
///
/// Four cases: tail-to-head append, head-to-tail prepend, head-to-head
/// prepend-reversed, tail-to-tail append-reversed. The shared duplicate
/// endpoint is dropped from the spliced side. Returns true when a splice
/// happened.
fn splice(current: &mut Polyline, other: &Polyline, tolerance: f64) -> bool {
    // Single-point polylines have identical first and last points and are
    // treated as non-mergeable.
    if current.is_degenerate() || other.is_degenerate() {
        return false;
    }

    let (cur_first, cur_last) = match (current.first(), current.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return false,
    };
    let (other_first, other_last) = match (other.first(), other.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return false,
    };

    let close = |a: Point, b: Point| a.distance_to(b) < tolerance;

    if close(cur_last, other_first) {
        current.points.extend_from_slice(&other.points[1..]);
        true
    } else if close(cur_first, other_last) {
        let mut points = other.points[..other.len() - 1].to_vec();
        points.extend_from_slice(&current.points);
        current.points = points;
        true
    } else if close(cur_first, other_first) {
        let reversed = other.reversed();
        let mut points = reversed.points[..reversed.len() - 1].to_vec();
        points.extend_from_slice(&current.points);
        current.points = points;
        true
    } else if close(cur_last, other_last) {
        let reversed = other.reversed();
        current.points.extend_from_slice(&reversed.points[1..]);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn polyline(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&p| Point::from(p)).collect())
    }

    // ==================== Stitching cases ====================

    #[test]
    fn test_tail_to_head_append() {
        let merged = merge_fragments(
            vec![
                polyline(&[(0.0, 0.0), (1.0, 0.0)]),
                polyline(&[(1.0, 0.0), (2.0, 0.0)]),
            ],
            0.01,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_head_to_tail_prepend() {
        let merged = merge_fragments(
            vec![
                polyline(&[(1.0, 0.0), (2.0, 0.0)]),
                polyline(&[(0.0, 0.0), (1.0, 0.0)]),
            ],
            0.01,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].first(), Some(Point::new(0.0, 0.0)));
        assert_eq!(merged[0].last(), Some(Point::new(2.0, 0.0)));
    }

    #[test]
    fn test_head_to_head_prepend_reversed() {
        let merged = merge_fragments(
            vec![
                polyline(&[(1.0, 0.0), (2.0, 0.0)]),
                polyline(&[(1.0, 0.0), (0.0, 0.0)]),
            ],
            0.01,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_tail_to_tail_append_reversed() {
        let merged = merge_fragments(
            vec![
                polyline(&[(0.0, 0.0), (1.0, 0.0)]),
                polyline(&[(2.0, 0.0), (1.0, 0.0)]),
            ],
            0.01,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0)
            ]
        );
    }

    // ==================== Chain and tolerance behavior ====================

    #[test]
    fn test_three_segment_chain_stitches_into_one_path() {
        let merged = merge_fragments(
            vec![
                polyline(&[(0.0, 0.0), (1.0, 0.0)]),
                polyline(&[(1.0, 0.0), (2.0, 0.0)]),
                polyline(&[(2.0, 0.0), (3.0, 0.0)]),
            ],
            0.01,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].first(), Some(Point::new(0.0, 0.0)));
        assert_eq!(merged[0].last(), Some(Point::new(3.0, 0.0)));
        assert!((merged[0].length() - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_nearly_touching_endpoints_merge_within_tolerance() {
        let merged = merge_fragments(
            vec![
                polyline(&[(0.0, 0.0), (1.0, 0.0)]),
                polyline(&[(1.05, 0.0), (2.0, 0.0)]),
            ],
            0.2,
        );
        assert_eq!(merged.len(), 1);
        // The shared near-duplicate endpoint is dropped from the spliced side.
        assert_eq!(merged[0].len(), 3);
    }

    #[test]
    fn test_zero_tolerance_merges_nothing() {
        let fragments = vec![
            polyline(&[(0.0, 0.0), (1.0, 0.0)]),
            polyline(&[(1.0, 0.0), (2.0, 0.0)]),
        ];
        let total: f64 = fragments.iter().map(Polyline::length).sum();
        let merged = merge_fragments(fragments, 0.0);
        // Strictly-less-than comparison: distance 0 does not merge at tolerance 0,
        // so every fragment survives and total length is conserved.
        assert_eq!(merged.len(), 2);
        let merged_total: f64 = merged.iter().map(Polyline::length).sum();
        assert!((merged_total - total).abs() < 0.001);
    }

    #[test]
    fn test_disjoint_fragments_pass_through() {
        let merged = merge_fragments(
            vec![
                polyline(&[(0.0, 0.0), (1.0, 0.0)]),
                polyline(&[(50.0, 50.0), (51.0, 50.0)]),
            ],
            0.2,
        );
        assert_eq!(merged.len(), 2);
    }

    // ==================== Idempotence ====================

    #[test]
    fn test_merging_is_idempotent() {
        let once = merge_fragments(
            vec![
                polyline(&[(0.0, 0.0), (1.0, 0.0)]),
                polyline(&[(1.0, 0.0), (2.0, 0.0)]),
                polyline(&[(10.0, 0.0), (11.0, 0.0)]),
            ],
            0.01,
        );
        let twice = merge_fragments(once.clone(), 0.01);
        assert_eq!(once, twice);
    }

    // ==================== Degenerate input ====================

    #[test]
    fn test_single_point_polyline_passes_through() {
        let merged = merge_fragments(
            vec![
                polyline(&[(0.0, 0.0)]),
                polyline(&[(0.0, 0.0), (1.0, 0.0)]),
            ],
            0.2,
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.iter().filter(|p| p.len() == 1).count(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_fragments(Vec::new(), 0.2).is_empty());
    }
}
