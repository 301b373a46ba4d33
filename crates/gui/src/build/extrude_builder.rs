//! Prism construction from a closed 2D profile.

use shared::{Profile, Segment, Solid};

use crate::error::ExtrudeError;
use crate::profile::extract_profile_with;

/// Profiles with |area| below this are warned about but still extruded
const DEGENERATE_AREA: f64 = 1e-12;

/// Reject zero and non-finite heights. Negative heights extrude downwards.
pub fn validate_height(height: f64) -> Result<f64, ExtrudeError> {
    if height == 0.0 || !height.is_finite() {
        return Err(ExtrudeError::InvalidHeight(height));
    }
    Ok(height)
}

/// Sweep `profile` along +Z by `height`.
///
/// For `n` distinct points the solid has `2n` vertices (base ring, then top
/// ring), `3n` edges (base ring, top ring, vertical) and `n + 2` faces
/// (lateral quads, base, top).
pub fn extrude(profile: &Profile, height: f64) -> Result<Solid, ExtrudeError> {
    let height = validate_height(height)?;

    let ring = profile.distinct_points();
    let n = ring.len();
    if n < 3 {
        return Err(ExtrudeError::EmptyProfile);
    }
    if profile.signed_area().abs() < DEGENERATE_AREA {
        tracing::warn!("Extruding a profile with zero area ({n} points)");
    }

    let vertices: Vec<[f64; 3]> = ring
        .iter()
        .map(|p| p.to_3d(0.0))
        .chain(ring.iter().map(|p| p.to_3d(height)))
        .collect();

    let mut edges = Vec::with_capacity(3 * n);
    edges.extend((0..n).map(|i| [i, (i + 1) % n]));
    edges.extend((0..n).map(|i| [i + n, (i + 1) % n + n]));
    edges.extend((0..n).map(|i| [i, i + n]));

    let mut faces: Vec<Vec<usize>> = Vec::with_capacity(n + 2);
    faces.extend((0..n).map(|i| {
        let next = (i + 1) % n;
        vec![i, next, next + n, i + n]
    }));
    faces.push((0..n).collect());
    faces.push((n..2 * n).collect());

    tracing::debug!(
        "Extruded {n}-point profile by {height}: {} vertices, {} edges, {} faces",
        vertices.len(),
        edges.len(),
        faces.len()
    );

    Ok(Solid {
        vertices,
        edges,
        faces,
    })
}

/// Extract a profile from committed segments and extrude it.
///
/// The height is checked before the segments, so a bad height is reported
/// even for an empty sketch.
pub fn extrude_sketch(segments: &[Segment], height: f64, strict: bool) -> Result<Solid, ExtrudeError> {
    let height = validate_height(height)?;
    let profile = extract_profile_with(segments, strict)?;
    extrude(&profile, height)
}
