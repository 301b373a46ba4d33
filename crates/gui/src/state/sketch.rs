use shared::{Point2D, PreviewLine, Segment, SketchGeometry, SketchPoint};

/// Snap radius used when none is configured
pub const DEFAULT_SNAP_DISTANCE: f64 = 0.1;

/// Sketch being drawn on the z = 0 plane.
///
/// Holds the snapped point set, the committed segments and the line
/// currently being dragged. A drag is active exactly when `current` is
/// `Some`, so the drawing flag and the in-progress line cannot disagree.
#[derive(Debug, Clone)]
pub struct SketchState {
    points: Vec<SketchPoint>,
    segments: Vec<Segment>,
    current: Option<PreviewLine>,
    snap_distance: f64,
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new(DEFAULT_SNAP_DISTANCE)
    }
}

impl SketchState {
    /// Empty sketch. Non-positive or non-finite snap distances fall back to the default.
    pub fn new(snap_distance: f64) -> Self {
        let snap_distance = if snap_distance.is_finite() && snap_distance > 0.0 {
            snap_distance
        } else {
            tracing::warn!(
                "Invalid snap distance {snap_distance}, using {DEFAULT_SNAP_DISTANCE}"
            );
            DEFAULT_SNAP_DISTANCE
        };
        Self {
            points: Vec::new(),
            segments: Vec::new(),
            current: None,
            snap_distance,
        }
    }

    pub fn snap_distance(&self) -> f64 {
        self.snap_distance
    }

    /// A line drag is in progress
    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// The in-progress line, if a drag is active
    pub fn current_line(&self) -> Option<&PreviewLine> {
        self.current.as_ref()
    }

    pub fn points(&self) -> &[SketchPoint] {
        &self.points
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Register a point, snapping to an existing one when within the snap distance.
    ///
    /// Linear scan over all points, O(n) per call. The first point within
    /// tolerance in insertion order wins; there is no closest-point search.
    pub fn add_point(&mut self, p: Point2D) -> SketchPoint {
        if let Some(existing) = self
            .points
            .iter()
            .find(|sp| sp.position.distance(&p) < self.snap_distance)
        {
            return *existing;
        }
        let point = SketchPoint {
            id: self.points.len(),
            position: p,
        };
        self.points.push(point);
        point
    }

    /// Begin a line at `p` (snapped). Replaces any unfinished line.
    pub fn start_line(&mut self, p: Point2D) -> SketchPoint {
        let start = self.add_point(p);
        self.current = Some(PreviewLine {
            start,
            end: start.position,
        });
        tracing::debug!("Line started at ({:.3}, {:.3})", start.position.x, start.position.y);
        start
    }

    /// Move the end of the in-progress line. Not snapped; the preview follows the cursor.
    pub fn update_current_line(&mut self, p: Point2D) -> bool {
        match self.current.as_mut() {
            Some(line) => {
                line.end = p;
                true
            }
            None => false,
        }
    }

    /// Finish the in-progress line at `p` (snapped).
    ///
    /// Commits a segment unless both ends snapped to the same point.
    /// The drag ends either way.
    pub fn end_line(&mut self, p: Point2D) -> Option<Segment> {
        let line = self.current?;
        let end = self.add_point(p);
        self.current = None;

        if end.id == line.start.id {
            tracing::debug!("Discarded zero-length line at point {}", end.id);
            return None;
        }

        let segment = Segment {
            start: line.start,
            end,
        };
        self.segments.push(segment);
        tracing::info!(
            "Committed segment {} -> {} ({} total)",
            segment.start.id,
            segment.end.id,
            self.segments.len()
        );
        Some(segment)
    }

    /// Abort the in-progress line without committing anything
    pub fn cancel_line(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Remove all points, segments and any in-progress line
    pub fn clear(&mut self) {
        self.points.clear();
        self.segments.clear();
        self.current = None;
    }

    /// Copy of the current geometry for rendering or extraction
    pub fn get_geometry(&self) -> SketchGeometry {
        SketchGeometry {
            points: self.points.clone(),
            segments: self.segments.clone(),
            preview: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    // --- Snapping ---

    #[test]
    fn test_snap_idempotent() {
        let mut s = SketchState::default();
        let first = s.add_point(p(0.37, -1.2));
        let second = s.add_point(first.position);
        assert_eq!(first, second);
        assert_eq!(s.points().len(), 1);
    }

    #[test]
    fn test_snap_tolerance_boundary() {
        let mut s = SketchState::new(0.1);
        let origin = s.add_point(p(0.0, 0.0));

        let near = s.add_point(p(0.09, 0.0));
        assert_eq!(near, origin);
        assert_eq!(s.points().len(), 1);

        let far = s.add_point(p(0.11, 0.0));
        assert_ne!(far.id, origin.id);
        assert_eq!(far.position, p(0.11, 0.0));
        assert_eq!(s.points().len(), 2);
    }

    #[test]
    fn test_snap_first_match_wins() {
        let mut s = SketchState::new(0.1);
        let a = s.add_point(p(0.0, 0.0));
        let _b = s.add_point(p(0.15, 0.0));
        // Within tolerance of both; a was inserted first, b is closer
        let hit = s.add_point(p(0.09, 0.0));
        assert_eq!(hit, a);
    }

    #[test]
    fn test_invalid_snap_distance_falls_back() {
        assert_eq!(SketchState::new(0.0).snap_distance(), DEFAULT_SNAP_DISTANCE);
        assert_eq!(SketchState::new(-1.0).snap_distance(), DEFAULT_SNAP_DISTANCE);
        assert_eq!(SketchState::new(f64::NAN).snap_distance(), DEFAULT_SNAP_DISTANCE);
        assert_eq!(SketchState::new(0.5).snap_distance(), 0.5);
    }

    // --- Line lifecycle ---

    #[test]
    fn test_degenerate_segment_rejected() {
        let mut s = SketchState::default();
        s.start_line(p(1.0, 1.0));
        assert!(s.end_line(p(1.0, 1.0)).is_none());
        assert!(s.segments().is_empty());
        assert!(!s.is_drawing());
        assert!(s.current_line().is_none());
    }

    #[test]
    fn test_end_snapping_back_to_start_is_degenerate() {
        let mut s = SketchState::default();
        s.start_line(p(1.0, 1.0));
        assert!(s.end_line(p(1.05, 1.0)).is_none());
        assert!(s.segments().is_empty());
    }

    #[test]
    fn test_drag_commits_once() {
        let mut s = SketchState::default();
        s.start_line(p(0.0, 0.0));
        assert!(s.update_current_line(p(1.0, 1.0)));
        assert!(s.segments().is_empty());

        let seg = s.end_line(p(2.0, 2.0)).unwrap();
        assert_eq!(s.segments().len(), 1);
        assert_eq!(seg.start.position, p(0.0, 0.0));
        assert_eq!(seg.end.position, p(2.0, 2.0));
        // The update position was never registered
        assert_eq!(s.points().len(), 2);
    }

    #[test]
    fn test_update_not_snapped() {
        let mut s = SketchState::default();
        s.add_point(p(3.0, 3.0));
        s.start_line(p(0.0, 0.0));
        s.update_current_line(p(3.02, 3.0));
        assert_eq!(s.current_line().unwrap().end, p(3.02, 3.0));
    }

    #[test]
    fn test_update_without_drag_ignored() {
        let mut s = SketchState::default();
        assert!(!s.update_current_line(p(1.0, 1.0)));
        assert!(s.end_line(p(1.0, 1.0)).is_none());
        assert!(s.points().is_empty());
    }

    #[test]
    fn test_segments_share_snapped_points() {
        let mut s = SketchState::default();
        s.start_line(p(0.0, 0.0));
        s.end_line(p(1.0, 0.0));
        s.start_line(p(1.02, 0.01));
        s.end_line(p(1.0, 1.0));
        assert_eq!(s.points().len(), 3);
        let segs = s.segments();
        assert_eq!(segs[0].end, segs[1].start);
    }

    #[test]
    fn test_cancel_line() {
        let mut s = SketchState::default();
        s.start_line(p(0.0, 0.0));
        assert!(s.cancel_line());
        assert!(!s.is_drawing());
        assert!(!s.cancel_line());
    }

    // --- Clear / snapshot ---

    #[test]
    fn test_clear_resets_everything() {
        let mut s = SketchState::default();
        s.start_line(p(0.0, 0.0));
        s.end_line(p(1.0, 0.0));
        s.start_line(p(1.0, 0.0));
        s.clear();
        assert!(s.points().is_empty());
        assert!(s.segments().is_empty());
        assert!(!s.is_drawing());
    }

    #[test]
    fn test_geometry_is_a_copy() {
        let mut s = SketchState::default();
        s.start_line(p(0.0, 0.0));
        s.end_line(p(1.0, 0.0));
        s.start_line(p(1.0, 0.0));
        s.update_current_line(p(1.0, 0.5));

        let mut g = s.get_geometry();
        assert_eq!(g.points.len(), 2);
        assert_eq!(g.segments.len(), 1);
        assert_eq!(g.preview.unwrap().end, p(1.0, 0.5));

        g.segments.clear();
        assert_eq!(s.segments().len(), 1);
    }
}
