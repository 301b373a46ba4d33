//! Solid validation utilities.
//!
//! `SolidValidator` checks that an extruded solid is structurally sound:
//! even vertex count, in-range indices, prism edge layout, closed surface.

use std::collections::HashMap;

use shared::Solid;

/// Validator for extruded `Solid` integrity checks.
pub struct SolidValidator<'a> {
    solid: &'a Solid,
}

impl<'a> SolidValidator<'a> {
    /// Create a new validator for the given solid.
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    pub fn vertex_count(&self) -> usize {
        self.solid.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.solid.edge_count()
    }

    pub fn face_count(&self) -> usize {
        self.solid.face_count()
    }

    /// V - E + F
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64
    }

    /// Base and top rings have the same size, and there are at least 3 of each.
    pub fn are_rings_balanced(&self) -> bool {
        let v = self.vertex_count();
        v % 2 == 0 && v >= 6
    }

    /// Check that every edge and face index refers to an existing vertex.
    pub fn are_indices_in_range(&self) -> bool {
        let max = self.vertex_count();
        self.solid.edges.iter().flatten().all(|&i| i < max)
            && self.solid.faces.iter().flatten().all(|&i| i < max)
    }

    /// Check the prism edge layout: base ring, top ring, then verticals.
    pub fn is_prism_edge_layout(&self) -> bool {
        let n = self.solid.ring_size();
        if self.edge_count() != 3 * n {
            return false;
        }
        self.solid.edges.iter().enumerate().all(|(k, e)| {
            let i = k % n.max(1);
            match k / n.max(1) {
                0 => *e == [i, (i + 1) % n],
                1 => *e == [i + n, (i + 1) % n + n],
                _ => *e == [i, i + n],
            }
        })
    }

    /// Every top vertex sits straight above its base vertex at the same height.
    pub fn are_verticals_straight(&self) -> bool {
        let n = self.solid.ring_size();
        let h = self.solid.height();
        (0..n).all(|i| {
            let b = self.solid.vertices[i];
            let t = self.solid.vertices[i + n];
            b[0] == t[0] && b[1] == t[1] && b[2] == 0.0 && (t[2] - h).abs() < 1e-12
        })
    }

    /// Every edge borders exactly two faces.
    pub fn is_closed_surface(&self) -> bool {
        let mut uses: HashMap<(usize, usize), usize> = HashMap::new();
        for face in &self.solid.faces {
            let k = face.len();
            for j in 0..k {
                let (a, b) = (face[j], face[(j + 1) % k]);
                *uses.entry((a.min(b), a.max(b))).or_default() += 1;
            }
        }
        let edges_ok = self.solid.edges.iter().all(|e| {
            uses.get(&(e[0].min(e[1]), e[0].max(e[1]))).copied() == Some(2)
        });
        edges_ok && uses.len() == self.edge_count()
    }

    /// Bounding box extents (dx, dy, dz).
    pub fn dimensions(&self) -> [f64; 3] {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for v in &self.solid.vertices {
            for a in 0..3 {
                min[a] = min[a].min(v[a]);
                max[a] = max[a].max(v[a]);
            }
        }
        if self.solid.vertices.is_empty() {
            return [0.0; 3];
        }
        [max[0] - min[0], max[1] - min[1], max[2] - min[2]]
    }

    /// Check that the bounding box is approximately `expected`.
    pub fn dimensions_approx(&self, expected: [f64; 3], tolerance: f64) -> bool {
        let dims = self.dimensions();
        (0..3).all(|a| (dims[a] - expected[a]).abs() < tolerance)
    }

    /// Run all validation checks and return a list of error messages.
    /// An empty list means the solid is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.are_rings_balanced() {
            errors.push(format!(
                "Vertex count {} is not two rings of at least 3",
                self.vertex_count()
            ));
            return errors;
        }

        if !self.are_indices_in_range() {
            errors.push(format!(
                "Indices out of range (vertex_count={})",
                self.vertex_count()
            ));
            return errors;
        }

        if !self.is_prism_edge_layout() {
            errors.push("Edges are not base ring, top ring, verticals".to_string());
        }

        if !self.are_verticals_straight() {
            errors.push("Top ring is not a vertical copy of the base ring".to_string());
        }

        let n = self.solid.ring_size();
        if self.face_count() != n + 2 {
            errors.push(format!(
                "Expected {} faces, found {}",
                n + 2,
                self.face_count()
            ));
        }

        if self.euler_characteristic() != 2 {
            errors.push(format!(
                "Euler characteristic is {}, expected 2",
                self.euler_characteristic()
            ));
        }

        if !self.is_closed_surface() {
            errors.push("Some edges do not border exactly two faces".to_string());
        }

        errors
    }
}
