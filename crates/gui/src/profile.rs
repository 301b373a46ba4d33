//! Closed profile extraction from committed sketch segments.

use std::collections::{HashMap, HashSet};

use shared::{Point2D, PointId, Profile, Segment};

use crate::error::ExtrudeError;

/// Collect the distinct segment endpoints in order of first appearance and
/// close the list.
///
/// Connectivity is not checked: disconnected chains are merged into one
/// point list in discovery order. Use [`extract_profile_with`] with
/// `strict = true` to require a single closed loop.
pub fn extract_profile(segments: &[Segment]) -> Result<Profile, ExtrudeError> {
    extract_profile_with(segments, false)
}

/// Like [`extract_profile`]; with `strict` the segments must form exactly
/// one closed loop, and the profile follows the loop order.
pub fn extract_profile_with(segments: &[Segment], strict: bool) -> Result<Profile, ExtrudeError> {
    if segments.is_empty() {
        return Err(ExtrudeError::EmptyProfile);
    }
    let points = if strict {
        walk_single_loop(segments)?
    } else {
        discovery_order(segments)
    };
    Ok(Profile::closed(points))
}

fn discovery_order(segments: &[Segment]) -> Vec<Point2D> {
    let mut seen = HashSet::new();
    let mut points = Vec::new();
    for seg in segments {
        for sp in [seg.start, seg.end] {
            if seen.insert(sp.id) {
                points.push(sp.position);
            }
        }
    }
    points
}

fn walk_single_loop(segments: &[Segment]) -> Result<Vec<Point2D>, ExtrudeError> {
    let mut adjacency: HashMap<PointId, Vec<PointId>> = HashMap::new();
    let mut positions: HashMap<PointId, Point2D> = HashMap::new();

    for seg in segments {
        if seg.is_degenerate() {
            return Err(ExtrudeError::OpenLoop(format!(
                "zero-length segment at point {}",
                seg.start.id
            )));
        }
        adjacency.entry(seg.start.id).or_default().push(seg.end.id);
        adjacency.entry(seg.end.id).or_default().push(seg.start.id);
        positions.insert(seg.start.id, seg.start.position);
        positions.insert(seg.end.id, seg.end.position);
    }

    // Every point on a simple loop joins exactly two segments
    let mut ids: Vec<_> = adjacency.keys().copied().collect();
    ids.sort_unstable();
    for id in ids {
        let degree = adjacency[&id].len();
        if degree != 2 {
            return Err(ExtrudeError::OpenLoop(format!(
                "point {id} joins {degree} segments"
            )));
        }
    }

    let start = segments[0].start.id;
    let mut order = vec![start];
    let mut prev = start;
    let mut current = segments[0].end.id;
    while current != start {
        if order.len() >= adjacency.len() {
            break;
        }
        order.push(current);
        let next = adjacency[&current]
            .iter()
            .copied()
            .find(|&n| n != prev)
            .unwrap_or(prev);
        prev = current;
        current = next;
    }

    if current != start || order.len() != adjacency.len() {
        return Err(ExtrudeError::OpenLoop(format!(
            "loop reaches {} of {} points",
            order.len(),
            adjacency.len()
        )));
    }

    Ok(order.iter().map(|id| positions[id]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{segments_from_loop, segment};

    #[test]
    fn test_triangle_is_closed() {
        let segs = segments_from_loop(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let profile = extract_profile(&segs).unwrap();
        let pts = profile.points();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts.first(), pts.last());
        assert_eq!(pts[1], Point2D::new(1.0, 0.0));
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert_eq!(extract_profile(&[]), Err(ExtrudeError::EmptyProfile));
        assert_eq!(extract_profile_with(&[], true), Err(ExtrudeError::EmptyProfile));
    }

    #[test]
    fn test_open_chain_is_closed_anyway() {
        let segs = vec![
            segment((0, [0.0, 0.0]), (1, [2.0, 0.0])),
            segment((1, [2.0, 0.0]), (2, [2.0, 2.0])),
        ];
        let profile = extract_profile(&segs).unwrap();
        assert_eq!(profile.distinct_points().len(), 3);
        assert!(profile.is_closed());
    }

    #[test]
    fn test_disconnected_chains_merged_in_discovery_order() {
        let segs = vec![
            segment((0, [0.0, 0.0]), (1, [1.0, 0.0])),
            segment((2, [5.0, 5.0]), (3, [6.0, 5.0])),
        ];
        let profile = extract_profile(&segs).unwrap();
        let xs: Vec<f64> = profile.distinct_points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 5.0, 6.0]);
    }

    #[test]
    fn test_strict_accepts_out_of_order_loop() {
        // Square whose top side was drawn right-to-left before the right side
        let segs = vec![
            segment((0, [0.0, 0.0]), (1, [1.0, 0.0])),
            segment((2, [0.0, 1.0]), (3, [1.0, 1.0])),
            segment((1, [1.0, 0.0]), (3, [1.0, 1.0])),
            segment((2, [0.0, 1.0]), (0, [0.0, 0.0])),
        ];
        let profile = extract_profile_with(&segs, true).unwrap();
        let expected = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];
        let got: Vec<[f64; 2]> = profile.points().iter().map(|p| [p.x, p.y]).collect();
        assert_eq!(got, expected);

        // Permissive mode keeps discovery order instead
        let loose = extract_profile(&segs).unwrap();
        assert_eq!(loose.distinct_points()[2], Point2D::new(0.0, 1.0));
        assert_eq!(loose.distinct_points()[3], Point2D::new(1.0, 1.0));
    }

    #[test]
    fn test_strict_rejects_open_chain() {
        let segs = vec![
            segment((0, [0.0, 0.0]), (1, [2.0, 0.0])),
            segment((1, [2.0, 0.0]), (2, [2.0, 2.0])),
        ];
        assert!(matches!(
            extract_profile_with(&segs, true),
            Err(ExtrudeError::OpenLoop(_))
        ));
    }

    #[test]
    fn test_strict_rejects_two_loops() {
        let mut segs = segments_from_loop(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let offset: Vec<Segment> = segs
            .iter()
            .map(|s| {
                let mut s = *s;
                s.start.id += 10;
                s.end.id += 10;
                s.start.position.x += 5.0;
                s.end.position.x += 5.0;
                s
            })
            .collect();
        segs.extend(offset);
        match extract_profile_with(&segs, true) {
            Err(ExtrudeError::OpenLoop(msg)) => assert!(msg.contains("3 of 6")),
            other => panic!("Expected OpenLoop, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_branch() {
        let mut segs = segments_from_loop(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        segs.push(segment((0, [0.0, 0.0]), (7, [-1.0, -1.0])));
        assert!(matches!(
            extract_profile_with(&segs, true),
            Err(ExtrudeError::OpenLoop(_))
        ));
    }
}
