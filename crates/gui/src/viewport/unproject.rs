//! Screen → sketch plane conversion.
//!
//! Screen coordinates follow pointer conventions: origin at the top-left
//! corner of the window, y growing downwards. A screen point is unprojected
//! at depth 0 (near plane) and depth 1 (far plane); the line through both is
//! intersected with the sketch plane z = 0.

use glam::{DMat4, DVec3, DVec4};
use shared::Point2D;

use crate::error::UnprojectError;
use crate::state::mode::InteractionMode;

/// Direction z-components below this are treated as parallel to the plane
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// Viewport rectangle in screen pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport anchored at the window origin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// A ray in world space; `origin` is the near-plane point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

/// Everything the sketch pipeline needs to know about the current view.
/// Built once per frame (or per event) from the mode/camera state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext {
    pub mode: InteractionMode,
    pub view: DMat4,
    pub projection: DMat4,
    pub viewport: Viewport,
    /// Tolerance for the parallel-ray test
    pub parallel_epsilon: f64,
}

impl ViewContext {
    pub fn is_sketch(&self) -> bool {
        self.mode == InteractionMode::Sketch
    }

    /// Map a screen position onto the sketch plane
    pub fn unproject(&self, screen_x: f64, screen_y: f64) -> Result<Point2D, UnprojectError> {
        let ray = screen_ray(
            screen_x,
            screen_y,
            &self.viewport,
            &self.view,
            &self.projection,
        )?;
        ray_sketch_plane(&ray, self.parallel_epsilon)
    }

    /// Project a world point to screen coordinates.
    /// Returns None for points behind the camera.
    pub fn project(&self, world: DVec3) -> Option<[f64; 2]> {
        let clip = self.projection * self.view * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let vp = &self.viewport;
        let x = vp.x + (ndc.x + 1.0) * 0.5 * vp.width;
        let y = vp.y + (1.0 - ndc.y) * 0.5 * vp.height;
        (x.is_finite() && y.is_finite()).then_some([x, y])
    }

    /// Project a point of the sketch plane to screen coordinates
    pub fn project_sketch_point(&self, p: Point2D) -> Option<[f64; 2]> {
        self.project(DVec3::new(p.x, p.y, 0.0))
    }
}

/// Unproject a screen position and intersect it with the sketch plane.
pub fn unproject(
    screen_x: f64,
    screen_y: f64,
    viewport: &Viewport,
    view: &DMat4,
    projection: &DMat4,
) -> Result<Point2D, UnprojectError> {
    let ray = screen_ray(screen_x, screen_y, viewport, view, projection)?;
    ray_sketch_plane(&ray, PARALLEL_EPSILON)
}

/// Cast a normalized ray from the near plane to the far plane through a screen position.
pub fn screen_ray(
    screen_x: f64,
    screen_y: f64,
    viewport: &Viewport,
    view: &DMat4,
    projection: &DMat4,
) -> Result<Ray, UnprojectError> {
    if !viewport.has_area() {
        return Err(UnprojectError::DegenerateViewport);
    }

    let view_proj = *projection * *view;
    let det = view_proj.determinant();
    if !det.is_finite() || det.abs() < 1e-12 {
        return Err(UnprojectError::SingularMatrix);
    }
    let inv = view_proj.inverse();

    // Screen → NDC (y flipped: screen y grows downwards)
    let ndc_x = 2.0 * (screen_x - viewport.x) / viewport.width - 1.0;
    let ndc_y = 1.0 - 2.0 * (screen_y - viewport.y) / viewport.height;

    // Depth 0 and 1 map to NDC z = -1 and +1
    let near = unproject_ndc(&inv, ndc_x, ndc_y, -1.0)?;
    let far = unproject_ndc(&inv, ndc_x, ndc_y, 1.0)?;

    let delta = far - near;
    let len = delta.length();
    if !len.is_finite() {
        return Err(UnprojectError::NonFinite);
    }
    if len < f64::EPSILON {
        return Err(UnprojectError::DegenerateRay);
    }

    Ok(Ray {
        origin: near,
        direction: delta / len,
    })
}

/// Intersect a ray with the sketch plane z = 0.
///
/// Only a ray parallel to the plane is rejected; an intersection behind the
/// near point is still returned.
pub fn ray_sketch_plane(ray: &Ray, epsilon: f64) -> Result<Point2D, UnprojectError> {
    if !ray.direction.is_finite() || !ray.origin.is_finite() {
        return Err(UnprojectError::NonFinite);
    }
    if ray.direction.z.abs() < epsilon {
        return Err(UnprojectError::ParallelToPlane);
    }

    let t = -ray.origin.z / ray.direction.z;
    let hit = ray.origin + ray.direction * t;
    let point = Point2D::new(hit.x, hit.y);
    if !point.is_finite() {
        return Err(UnprojectError::NonFinite);
    }
    Ok(point)
}

fn unproject_ndc(inv: &DMat4, x: f64, y: f64, z: f64) -> Result<DVec3, UnprojectError> {
    let p = *inv * DVec4::new(x, y, z, 1.0);
    if p.w.abs() < f64::EPSILON {
        return Err(UnprojectError::PointAtInfinity);
    }
    let p = p.truncate() / p.w;
    if !p.is_finite() {
        return Err(UnprojectError::NonFinite);
    }
    Ok(p)
}
