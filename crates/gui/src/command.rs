//! JSON command protocol for scripted agents.
//!
//! Each command is applied to a [`TestHarness`] and answered with a
//! [`CommandResponse`].

use serde::{Deserialize, Serialize};

use crate::harness::TestHarness;
use crate::interaction::EventOutcome;

/// A command an agent can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Switch between navigation and sketch mode.
    ToggleMode,
    /// Raw pointer input in screen pixels.
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    /// Drag between two sketch-plane points (world coordinates).
    DrawSegment { from: [f64; 2], to: [f64; 2] },
    /// Extrude the current sketch by a numeric height.
    Extrude { height: f64 },
    /// Extrude with a height typed into the submenu text box.
    ExtrudeText { text: String },
    /// Drop all sketch points and segments.
    ClearSketch,
    /// Delete a solid from the scene.
    RemoveSolid { id: String },
    /// Show or hide a solid.
    SetVisible { id: String, visible: bool },
    /// Undo the last scene change.
    Undo,
    /// Redo the last undone scene change.
    Redo,
    /// Summarize mode, sketch and scene.
    Inspect,
    /// Export the sketch geometry and all solids as JSON.
    ExportGeometry,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }

    /// Map an input outcome: failures become errors, everything else succeeds
    fn from_outcome(outcome: EventOutcome) -> Self {
        let label = outcome.label();
        match outcome {
            EventOutcome::Unprojection(e) => Self::err(e.to_string()),
            EventOutcome::Rejected(e) => Self::err(e.to_string()),
            EventOutcome::Started(p) => Self::ok_with_data(serde_json::json!({
                "outcome": label,
                "point": p,
            })),
            EventOutcome::Committed(seg) => Self::ok_with_data(serde_json::json!({
                "outcome": label,
                "segment": seg,
            })),
            EventOutcome::Extruded(id) => Self::ok_with_data(serde_json::json!({
                "outcome": label,
                "id": id,
            })),
            EventOutcome::Ignored | EventOutcome::Updated | EventOutcome::Discarded => {
                Self::ok_with_data(serde_json::json!({ "outcome": label }))
            }
        }
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::ToggleMode => {
            let mode = harness.toggle_mode();
            CommandResponse::ok_with_data(serde_json::json!({ "mode": mode }))
        }

        AgentCommand::PointerDown { x, y } => {
            CommandResponse::from_outcome(harness.pointer_down(x, y))
        }

        AgentCommand::PointerMove { x, y } => {
            CommandResponse::from_outcome(harness.pointer_move(x, y))
        }

        AgentCommand::PointerUp { x, y } => CommandResponse::from_outcome(harness.pointer_up(x, y)),

        AgentCommand::DrawSegment { from, to } => {
            match harness.draw_segment(from.into(), to.into()) {
                Ok(outcome) => CommandResponse::from_outcome(outcome),
                Err(e) => CommandResponse::err(e),
            }
        }

        AgentCommand::Extrude { height } => CommandResponse::from_outcome(harness.extrude(height)),

        AgentCommand::ExtrudeText { text } => match harness.extrude_text(&text) {
            Ok(outcome) => CommandResponse::from_outcome(outcome),
            Err(e) => CommandResponse::err(e),
        },

        AgentCommand::ClearSketch => {
            harness.clear_sketch();
            CommandResponse::ok()
        }

        AgentCommand::RemoveSolid { id } => {
            if harness.state.scene.remove_solid(&id) {
                CommandResponse::ok_with_data(serde_json::json!({ "removed": id }))
            } else {
                CommandResponse::err(format!("No solid with id {id}"))
            }
        }

        AgentCommand::SetVisible { id, visible } => {
            if harness.state.scene.set_visible(&id, visible) {
                CommandResponse::ok_with_data(serde_json::json!({ "id": id, "visible": visible }))
            } else {
                CommandResponse::err(format!("No solid with id {id}"))
            }
        }

        AgentCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        AgentCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        AgentCommand::Inspect => {
            let sketch = &harness.state.sketch;
            let solids: Vec<serde_json::Value> = harness
                .state
                .scene
                .solids()
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "id": s.id,
                        "name": s.name,
                        "height": s.height,
                        "visible": s.visible,
                        "vertex_count": s.solid.vertex_count(),
                        "edge_count": s.solid.edge_count(),
                        "face_count": s.solid.face_count(),
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "mode": harness.mode(),
                "point_count": sketch.points().len(),
                "segment_count": sketch.segments().len(),
                "drawing": sketch.is_drawing(),
                "solid_count": solids.len(),
                "solids": solids,
                "last_error": harness.state.last_error,
            }))
        }

        AgentCommand::ExportGeometry => {
            let data = serde_json::json!({
                "sketch": harness.geometry(),
                "scene": harness.state.scene.scene,
            });
            CommandResponse::ok_with_data(data)
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
