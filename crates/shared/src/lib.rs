use serde::{Deserialize, Serialize};

/// Index of a point inside a sketch's point set
pub type PointId = usize;

/// 2D point on the sketch plane (world XY, z = 0)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Lift onto the plane z = `z`
    pub fn to_3d(self, z: f64) -> [f64; 3] {
        [self.x, self.y, z]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

/// A point registered in a sketch. Two sketch points are the same point
/// when their ids match; the snap step guarantees that nearby coordinates
/// resolve to the same id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SketchPoint {
    pub id: PointId,
    pub position: Point2D,
}

/// A committed line of the sketch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: SketchPoint,
    pub end: SketchPoint,
}

impl Segment {
    /// Both endpoints snapped to the same point
    pub fn is_degenerate(&self) -> bool {
        self.start.id == self.end.id
    }

    pub fn length(&self) -> f64 {
        self.start.position.distance(&self.end.position)
    }
}

/// Uncommitted line shown while a drag is active.
/// The start is snapped, the end follows the raw cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewLine {
    pub start: SketchPoint,
    pub end: Point2D,
}

/// Read-only copy of a sketch for rendering and profile extraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SketchGeometry {
    pub points: Vec<SketchPoint>,
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewLine>,
}

impl SketchGeometry {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.segments.is_empty()
    }
}

/// Closed 2D polygon: the last point always repeats the first one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Point2D>", into = "Vec<Point2D>")]
pub struct Profile {
    points: Vec<Point2D>,
}

impl Profile {
    /// Build a profile, appending the first point when the list is not closed yet
    pub fn closed(mut points: Vec<Point2D>) -> Self {
        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) {
            if points.len() == 1 || first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    /// All points, closing point included
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Points without the repeated closing point
    pub fn distinct_points(&self) -> &[Point2D] {
        match self.points.len() {
            0 => &[],
            n => &self.points[..n - 1],
        }
    }

    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed shoelace area; positive for counter-clockwise profiles
    pub fn signed_area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
            * 0.5
    }
}

impl From<Vec<Point2D>> for Profile {
    fn from(points: Vec<Point2D>) -> Self {
        Self::closed(points)
    }
}

impl From<Profile> for Vec<Point2D> {
    fn from(profile: Profile) -> Self {
        profile.points
    }
}

/// Extruded prism.
///
/// For a ring of `n` profile points: vertices `0..n` sit at z = 0 and
/// vertex `i + n` sits directly above vertex `i`. Faces are the `n` side
/// quads followed by the base face and the top face.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Solid {
    pub vertices: Vec<[f64; 3]>,
    pub edges: Vec<[usize; 2]>,
    pub faces: Vec<Vec<usize>>,
}

impl Solid {
    /// Number of points in one ring (base or top)
    pub fn ring_size(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Height of the top ring above the base ring
    pub fn height(&self) -> f64 {
        let n = self.ring_size();
        if n == 0 {
            return 0.0;
        }
        self.vertices[n][2] - self.vertices[0][2]
    }
}
