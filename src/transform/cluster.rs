//! Corridor clustering: group merged paths that lie near each other.

use crate::model::Polyline;

/// Group paths whose endpoints lie within `cluster_distance` of each other
/// into corridors, even when they do not touch.
///
/// Coarser sibling of [`merge_fragments`](super::merge_fragments): the
/// proximity test compares any endpoint of the accumulator against any
/// endpoint of a candidate, and an absorbed path's points are appended in
/// order rather than spliced for continuity. The result is a point
/// collection that stands for "roughly one road", not a clean traversal.
/// Points already present in the corridor (within `dedup_tolerance`; a
/// non-positive value means exact comparison) are dropped on absorption.
///
/// Every input path's points fold into exactly one corridor. O(n^2).
pub fn cluster_paths(
    paths: Vec<Polyline>,
    cluster_distance: f64,
    dedup_tolerance: f64,
) -> Vec<Polyline> {
    let mut pool = paths;
    let mut consumed = vec![false; pool.len()];
    let mut corridors: Vec<Polyline> = Vec::with_capacity(pool.len());

    for start in 0..pool.len() {
        if consumed[start] {
            continue;
        }
        consumed[start] = true;
        let mut corridor = std::mem::take(&mut pool[start]);

        // Absorbing a path adds new endpoints, so rescan until stable.
        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..pool.len() {
                if consumed[i] {
                    continue;
                }
                if endpoints_close(&corridor, &pool[i], cluster_distance) {
                    absorb(&mut corridor, &pool[i], dedup_tolerance);
                    consumed[i] = true;
                    changed = true;
                }
            }
        }

        corridors.push(corridor);
    }

    corridors
}

/// Whether any endpoint of `a` lies within `distance` of any endpoint of `b`.
fn endpoints_close(a: &Polyline, b: &Polyline, distance: f64) -> bool {
    let a_ends = [a.first(), a.last()];
    let b_ends = [b.first(), b.last()];

    a_ends.iter().flatten().any(|p1| {
        b_ends
            .iter()
            .flatten()
            .any(|p2| p1.distance_to(*p2) < distance)
    })
}

/// Append `other`'s points to the corridor, skipping points already present.
fn absorb(corridor: &mut Polyline, other: &Polyline, dedup_tolerance: f64) {
    for &point in &other.points {
        if !corridor.contains_point(point, dedup_tolerance) {
            corridor.points.push(point);
        }
    }
}
