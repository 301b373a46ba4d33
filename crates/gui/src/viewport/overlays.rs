//! Painter-based drawing of the scene, the sketch and its preview

use egui::{Color32, Painter, Pos2, Stroke};
use glam::DVec3;
use shared::{Point2D, SketchGeometry, Solid};

use super::unproject::ViewContext;
use crate::state::scene::SceneState;

/// Half extent of the ground grid, in world units
const GRID_EXTENT: i32 = 10;

const GRID_COLOR: Color32 = Color32::from_rgb(55, 55, 62);
const POINT_COLOR: Color32 = Color32::from_rgb(240, 220, 60);
const SEGMENT_COLOR: Color32 = Color32::from_rgb(70, 210, 90);
const PREVIEW_COLOR: Color32 = Color32::WHITE;
const SOLID_COLOR: Color32 = Color32::from_rgb(80, 200, 230);

fn to_screen(ctx: &ViewContext, p: DVec3) -> Option<Pos2> {
    ctx.project(p).map(|[x, y]| egui::pos2(x as f32, y as f32))
}

fn plane(p: Point2D) -> DVec3 {
    DVec3::new(p.x, p.y, 0.0)
}

/// Draw a world-space line; skipped when either end is behind the camera
fn world_line(painter: &Painter, ctx: &ViewContext, a: DVec3, b: DVec3, stroke: Stroke) {
    if let (Some(a), Some(b)) = (to_screen(ctx, a), to_screen(ctx, b)) {
        painter.line_segment([a, b], stroke);
    }
}

/// Ground grid on z = 0 plus the X/Y/Z axes
pub fn draw_grid_and_axes(painter: &Painter, ctx: &ViewContext) {
    let stroke = Stroke::new(1.0, GRID_COLOR);
    let e = GRID_EXTENT as f64;
    for i in -GRID_EXTENT..=GRID_EXTENT {
        let t = i as f64;
        world_line(painter, ctx, DVec3::new(t, -e, 0.0), DVec3::new(t, e, 0.0), stroke);
        world_line(painter, ctx, DVec3::new(-e, t, 0.0), DVec3::new(e, t, 0.0), stroke);
    }

    let axes = [
        (DVec3::X, "X", Color32::from_rgb(220, 70, 70)),
        (DVec3::Y, "Y", Color32::from_rgb(70, 200, 70)),
        (DVec3::Z, "Z", Color32::from_rgb(70, 110, 220)),
    ];
    for (dir, label, color) in axes {
        world_line(painter, ctx, DVec3::ZERO, dir * 2.0, Stroke::new(2.0, color));
        if let Some(pos) = to_screen(ctx, dir * 2.2) {
            painter.text(
                pos,
                egui::Align2::LEFT_BOTTOM,
                label,
                egui::FontId::monospace(12.0),
                color,
            );
        }
    }
}

/// Visible solids as wireframes
pub fn draw_solids(painter: &Painter, ctx: &ViewContext, scene: &SceneState) {
    let stroke = Stroke::new(1.5, SOLID_COLOR);
    for s in scene.solids().iter().filter(|s| s.visible) {
        draw_wireframe(painter, ctx, &s.solid, stroke);
    }
}

fn draw_wireframe(painter: &Painter, ctx: &ViewContext, solid: &Solid, stroke: Stroke) {
    for &[a, b] in &solid.edges {
        let (Some(va), Some(vb)) = (solid.vertices.get(a), solid.vertices.get(b)) else {
            continue;
        };
        world_line(painter, ctx, DVec3::from_array(*va), DVec3::from_array(*vb), stroke);
    }
}

/// Committed segments, snapped points and the line being dragged
pub fn draw_sketch(painter: &Painter, ctx: &ViewContext, geometry: &SketchGeometry) {
    let seg_stroke = Stroke::new(2.0, SEGMENT_COLOR);
    for seg in &geometry.segments {
        world_line(
            painter,
            ctx,
            plane(seg.start.position),
            plane(seg.end.position),
            seg_stroke,
        );
    }

    if let Some(preview) = &geometry.preview {
        world_line(
            painter,
            ctx,
            plane(preview.start.position),
            plane(preview.end),
            Stroke::new(1.5, PREVIEW_COLOR),
        );
    }

    for p in &geometry.points {
        if let Some(pos) = to_screen(ctx, plane(p.position)) {
            painter.circle_filled(pos, 3.5, POINT_COLOR);
        }
    }
}

/// Mode banner in the top-left corner
pub fn draw_mode_banner(painter: &Painter, rect: egui::Rect, text: &str) {
    let banner = egui::Rect::from_min_size(
        egui::pos2(rect.left() + 4.0, rect.top() + 4.0),
        egui::vec2(160.0, 22.0),
    );
    painter.rect_filled(banner, 4.0, Color32::from_rgba_premultiplied(0, 0, 0, 140));
    painter.text(
        banner.left_center() + egui::vec2(6.0, 0.0),
        egui::Align2::LEFT_CENTER,
        text,
        egui::FontId::monospace(11.0),
        Color32::from_rgb(170, 170, 180),
    );
}
