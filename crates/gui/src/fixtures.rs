//! Factory functions for creating test data.
//!
//! Provides helpers to construct sketch points, segments and profiles
//! used in tests and by the agent command interface.

use shared::*;

// ── Segment factories ───────────────────────────────────────────

/// Sketch point with an explicit id.
pub fn sketch_point(id: PointId, pos: [f64; 2]) -> SketchPoint {
    SketchPoint {
        id,
        position: pos.into(),
    }
}

/// Segment between two `(id, position)` pairs.
pub fn segment(start: (PointId, [f64; 2]), end: (PointId, [f64; 2])) -> Segment {
    Segment {
        start: sketch_point(start.0, start.1),
        end: sketch_point(end.0, end.1),
    }
}

/// Closed chain of segments through `corners`, point ids `0..n`.
pub fn segments_from_loop(corners: &[[f64; 2]]) -> Vec<Segment> {
    let n = corners.len();
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            segment((i, corners[i]), (j, corners[j]))
        })
        .collect()
}

/// Axis-aligned square of side `size` with its lower-left corner at the origin.
pub fn square_segments(size: f64) -> Vec<Segment> {
    segments_from_loop(&[[0.0, 0.0], [size, 0.0], [size, size], [0.0, size]])
}

/// Two unconnected lines.
pub fn disconnected_segments() -> Vec<Segment> {
    vec![
        segment((0, [0.0, 0.0]), (1, [1.0, 0.0])),
        segment((2, [3.0, 3.0]), (3, [4.0, 3.0])),
    ]
}

// ── Profile / solid factories ───────────────────────────────────

/// Closed profile through `corners`.
pub fn profile(corners: &[[f64; 2]]) -> Profile {
    Profile::closed(corners.iter().map(|&c| Point2D::from(c)).collect())
}

/// Closed square profile of side `size`.
pub fn square_profile(size: f64) -> Profile {
    profile(&[[0.0, 0.0], [size, 0.0], [size, size], [0.0, size]])
}

