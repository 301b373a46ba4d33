//! Input event dispatch for the sketch pipeline.
//!
//! Events are applied to [`AppState`] strictly in arrival order. Failures
//! are absorbed here and reported through [`EventOutcome`]; the sketch is
//! never left with a half-finished drag after an error.

use serde::{Deserialize, Serialize};
use shared::{Segment, SketchPoint};

use crate::build::extrude_sketch;
use crate::error::{ExtrudeError, UnprojectError};
use crate::state::scene::SolidId;
use crate::state::AppState;
use crate::viewport::unproject::ViewContext;

/// A discrete input event. Pointer coordinates are screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    CommitExtrusion { height: f64 },
}

/// What an event did to the state
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Not applicable in the current mode or drag state
    Ignored,
    /// Screen position could not be mapped to the plane; event dropped
    Unprojection(UnprojectError),
    /// A drag began at this (snapped) point
    Started(SketchPoint),
    /// The preview end moved
    Updated,
    /// A segment was committed
    Committed(Segment),
    /// The drag ended on its own start point; nothing committed
    Discarded,
    /// A solid was added to the scene
    Extruded(SolidId),
    /// Extrusion refused; the sketch is unchanged
    Rejected(ExtrudeError),
}

impl EventOutcome {
    /// Short name for logs and command responses
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Unprojection(_) => "unprojection_failed",
            Self::Started(_) => "started",
            Self::Updated => "updated",
            Self::Committed(_) => "committed",
            Self::Discarded => "discarded",
            Self::Extruded(_) => "extruded",
            Self::Rejected(_) => "rejected",
        }
    }
}

/// Apply one input event.
pub fn handle_event(state: &mut AppState, ctx: &ViewContext, event: InputEvent) -> EventOutcome {
    match event {
        InputEvent::PointerDown { x, y } => {
            if !ctx.is_sketch() {
                return EventOutcome::Ignored;
            }
            match ctx.unproject(x, y) {
                Ok(p) => EventOutcome::Started(state.sketch.start_line(p)),
                Err(e) => {
                    tracing::warn!("Pointer down at ({x}, {y}) ignored: {e}");
                    EventOutcome::Unprojection(e)
                }
            }
        }
        InputEvent::PointerMove { x, y } => {
            if !ctx.is_sketch() || !state.sketch.is_drawing() {
                return EventOutcome::Ignored;
            }
            match ctx.unproject(x, y) {
                Ok(p) => {
                    state.sketch.update_current_line(p);
                    EventOutcome::Updated
                }
                Err(e) => {
                    tracing::debug!("Pointer move at ({x}, {y}) ignored: {e}");
                    EventOutcome::Unprojection(e)
                }
            }
        }
        InputEvent::PointerUp { x, y } => {
            if !ctx.is_sketch() || !state.sketch.is_drawing() {
                return EventOutcome::Ignored;
            }
            match ctx.unproject(x, y) {
                Ok(p) => match state.sketch.end_line(p) {
                    Some(segment) => EventOutcome::Committed(segment),
                    None => EventOutcome::Discarded,
                },
                Err(e) => {
                    state.sketch.cancel_line();
                    tracing::warn!("Pointer up at ({x}, {y}) could not be placed, line cancelled: {e}");
                    EventOutcome::Unprojection(e)
                }
            }
        }
        InputEvent::CommitExtrusion { height } => commit_extrusion(state, height),
    }
}

fn commit_extrusion(state: &mut AppState, height: f64) -> EventOutcome {
    let strict = state.settings.sketch.strict_loop_validation;
    match extrude_sketch(state.sketch.segments(), height, strict) {
        Ok(solid) => {
            let id = state.scene.add_solid(solid, height);
            state.sketch.clear();
            state.extrude_dialog.close();
            state.last_error = None;
            EventOutcome::Extruded(id)
        }
        Err(e) => {
            tracing::warn!("Extrusion rejected: {e}");
            state.last_error = Some(e.to_string());
            EventOutcome::Rejected(e)
        }
    }
}
