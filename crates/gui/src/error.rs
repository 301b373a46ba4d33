//! Error types for the sketch and extrusion pipeline.

use thiserror::Error;

/// Why a screen position could not be mapped onto the sketch plane.
///
/// These are absorbed by the input handler: the triggering event is
/// dropped and the sketch is left consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnprojectError {
    /// Viewport has zero (or negative) width or height.
    #[error("viewport has no area")]
    DegenerateViewport,

    /// projection * view cannot be inverted.
    #[error("view-projection matrix is not invertible")]
    SingularMatrix,

    /// The unprojected point lies at infinity (w = 0).
    #[error("unprojected point lies at infinity")]
    PointAtInfinity,

    /// Near and far points coincide, so the ray has no direction.
    #[error("near and far points coincide")]
    DegenerateRay,

    /// Ray runs parallel to the sketch plane z = 0.
    #[error("ray is parallel to the sketch plane")]
    ParallelToPlane,

    /// Computation produced NaN or infinity.
    #[error("unprojection produced a non-finite value")]
    NonFinite,
}

/// Errors from profile extraction and extrusion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtrudeError {
    /// No segments, or fewer than 3 distinct profile points.
    #[error("profile is empty or has fewer than 3 distinct points")]
    EmptyProfile,

    /// Height is zero or not finite.
    #[error("invalid extrusion height: {0}")]
    InvalidHeight(f64),

    /// Segments are not a single closed loop (strict validation only).
    #[error("segments do not form a single closed loop: {0}")]
    OpenLoop(String),
}
