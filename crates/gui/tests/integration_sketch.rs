//! Integration tests for the sketch-to-extrusion pipeline.
//!
//! Drives the headless harness with pointer events the way the viewport does.

use extrude_gui_lib::error::ExtrudeError;
use extrude_gui_lib::harness::TestHarness;
use extrude_gui_lib::interaction::EventOutcome;
use extrude_gui_lib::state::mode::InteractionMode;
use extrude_gui_lib::state::settings::AppSettings;
use extrude_gui_lib::validation::SolidValidator;
use shared::Point2D;

const SQUARE: [[f64; 2]; 4] = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];

fn sketching() -> TestHarness {
    let mut h = TestHarness::new();
    h.toggle_mode();
    assert_eq!(h.mode(), InteractionMode::Sketch);
    h
}

#[test]
fn test_square_to_cube() {
    let mut h = sketching();
    let outcomes = h.draw_polygon(&SQUARE).unwrap();
    assert!(outcomes
        .iter()
        .all(|o| matches!(o, EventOutcome::Committed(_))));

    let g = h.geometry();
    assert_eq!(g.points.len(), 4, "corners must snap together");
    assert_eq!(g.segments.len(), 4);

    let out = h.extrude(5.0);
    assert!(matches!(out, EventOutcome::Extruded(_)));

    let solid = &h.last_solid().unwrap().solid;
    assert_eq!(solid.vertex_count(), 8);
    assert_eq!(solid.edge_count(), 12);
    assert_eq!(solid.face_count(), 6);
    assert!(h.validate_last().is_empty(), "{:?}", h.validate_last());

    let v = SolidValidator::new(solid);
    assert!(v.dimensions_approx([2.0, 2.0, 5.0], 1e-6));
}

#[test]
fn test_extrude_clears_sketch() {
    let mut h = sketching();
    h.draw_polygon(&SQUARE).unwrap();
    h.extrude(1.0);
    assert!(h.geometry().is_empty());
    assert_eq!(h.solid_count(), 1);

    // Next profile starts from a clean point set
    h.draw_polygon(&[[5.0, 0.0], [6.0, 0.0], [5.0, 1.0]]).unwrap();
    assert_eq!(h.geometry().points[0].id, 0);
    h.extrude(2.0);
    assert_eq!(h.solid_count(), 2);
    assert_eq!(h.last_solid().unwrap().solid.vertex_count(), 6);
}

#[test]
fn test_zero_height_rejected_sketch_kept() {
    let mut h = sketching();
    h.draw_polygon(&SQUARE).unwrap();
    let out = h.extrude(0.0);
    assert_eq!(out, EventOutcome::Rejected(ExtrudeError::InvalidHeight(0.0)));
    assert_eq!(h.solid_count(), 0);
    assert_eq!(h.geometry().segments.len(), 4);
    assert!(h.state.last_error.is_some());

    // A valid retry goes through and clears the error
    assert!(matches!(h.extrude(1.0), EventOutcome::Extruded(_)));
    assert!(h.state.last_error.is_none());
}

#[test]
fn test_empty_sketch_rejected() {
    let mut h = sketching();
    assert_eq!(h.extrude(5.0), EventOutcome::Rejected(ExtrudeError::EmptyProfile));
}

#[test]
fn test_two_segment_chain_closed_into_triangle() {
    let mut h = sketching();
    h.draw_segment(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0))
        .unwrap();
    h.draw_segment(Point2D::new(1.0, 0.0), Point2D::new(1.0, 1.0))
        .unwrap();
    assert!(matches!(h.extrude(1.0), EventOutcome::Extruded(_)));
    assert_eq!(h.last_solid().unwrap().solid.ring_size(), 3);
}

#[test]
fn test_strict_mode_rejects_open_chain() {
    let mut settings = AppSettings::default();
    settings.sketch.strict_loop_validation = true;
    let mut h = TestHarness::with_settings(settings);
    h.enter_sketch_mode();

    h.draw_segment(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0))
        .unwrap();
    h.draw_segment(Point2D::new(1.0, 0.0), Point2D::new(1.0, 1.0))
        .unwrap();
    assert!(matches!(
        h.extrude(1.0),
        EventOutcome::Rejected(ExtrudeError::OpenLoop(_))
    ));

    h.draw_segment(Point2D::new(1.0, 1.0), Point2D::new(0.0, 0.0))
        .unwrap();
    assert!(matches!(h.extrude(1.0), EventOutcome::Extruded(_)));
}

#[test]
fn test_pointer_ignored_in_navigation() {
    let mut h = TestHarness::new();
    assert_eq!(h.pointer_down(800.0, 500.0), EventOutcome::Ignored);
    assert_eq!(h.pointer_up(900.0, 500.0), EventOutcome::Ignored);
    assert!(h.geometry().is_empty());
}

#[test]
fn test_preview_follows_cursor_until_release() {
    let mut h = sketching();
    h.pointer_down(800.0, 500.0);
    h.pointer_move(900.0, 500.0);
    let g = h.geometry();
    let preview = g.preview.unwrap();
    assert!(preview.end.x > 0.0);
    assert!(preview.end.y.abs() < 1e-9);
    assert!(g.segments.is_empty());

    h.pointer_up(900.0, 400.0);
    let g = h.geometry();
    assert!(g.preview.is_none());
    assert_eq!(g.segments.len(), 1);
    // Screen up is +Y on the plane
    assert!(g.segments[0].end.position.y > 0.0);
}

#[test]
fn test_zoom_changes_screen_scale() {
    let mut h = sketching();
    let near = h.screen_of(Point2D::new(1.0, 0.0)).unwrap();
    h.state.mode.zoom_out();
    let far = h.screen_of(Point2D::new(1.0, 0.0)).unwrap();
    // Farther camera, point closer to the center
    assert!(far[0] < near[0]);
    assert!(far[0] > 800.0);
}

#[test]
fn test_undo_redo_extrusions() {
    let mut h = sketching();
    h.draw_polygon(&SQUARE).unwrap();
    h.extrude(1.0);
    h.draw_polygon(&SQUARE).unwrap();
    h.extrude(2.0);
    assert_eq!(h.solid_count(), 2);

    assert!(h.undo());
    assert_eq!(h.solid_count(), 1);
    assert!(h.redo());
    assert_eq!(h.last_solid().unwrap().height, 2.0);
    assert!(!h.redo());
}

#[test]
fn test_extrude_text_expression() {
    let mut h = sketching();
    h.draw_polygon(&SQUARE).unwrap();
    let out = h.extrude_text("1.5 * 2").unwrap();
    assert!(matches!(out, EventOutcome::Extruded(_)));
    assert!((h.last_solid().unwrap().solid.height() - 3.0).abs() < 1e-12);

    h.draw_polygon(&SQUARE).unwrap();
    assert!(h.extrude_text("tall").is_err());
    assert_eq!(h.solid_count(), 1);
}

#[test]
fn test_extrude_text_integer_division() {
    let mut h = sketching();
    h.draw_polygon(&SQUARE).unwrap();
    assert!(matches!(h.extrude_text("5/2").unwrap(), EventOutcome::Extruded(_)));
    assert_eq!(h.last_solid().unwrap().height, 2.5);

    h.draw_polygon(&SQUARE).unwrap();
    assert!(matches!(h.extrude_text("1/2").unwrap(), EventOutcome::Extruded(_)));
    assert!((h.last_solid().unwrap().solid.height() - 0.5).abs() < 1e-12);
}
