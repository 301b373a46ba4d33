//! Scene state management
//!
//! Extruded solids handed over by the sketch pipeline, with undo/redo history.

mod history;
mod solid_ops;

use serde::{Deserialize, Serialize};
use shared::Solid;

/// Identifier of a solid in the scene
pub type SolidId = String;

/// Maximum number of undo snapshots kept
pub const UNDO_LIMIT: usize = 100;

/// A solid placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSolid {
    pub id: SolidId,
    pub name: String,
    /// Extrusion height the solid was built with
    pub height: f64,
    pub solid: Solid,
    pub visible: bool,
}

/// Everything in the scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub solids: Vec<SceneSolid>,
}

/// Scene state with solids and undo/redo history
#[derive(Debug, Default)]
pub struct SceneState {
    /// Current scene
    pub scene: SceneDescription,
    /// Undo stack - previous states
    pub(crate) undo_stack: Vec<SceneDescription>,
    /// Redo stack - undone states
    pub(crate) redo_stack: Vec<SceneDescription>,
    /// Monotonically increasing version counter for render invalidation
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn solids(&self) -> &[SceneSolid] {
        &self.scene.solids
    }

    pub fn len(&self) -> usize {
        self.scene.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.solids.is_empty()
    }

    /// Get a solid by ID
    pub fn get(&self, id: &str) -> Option<&SceneSolid> {
        self.scene.solids.iter().find(|s| s.id == id)
    }

    /// Most recently added solid
    pub fn last(&self) -> Option<&SceneSolid> {
        self.scene.solids.last()
    }

    /// Save current state to undo stack
    pub(crate) fn save_undo(&mut self) {
        self.undo_stack.push(self.scene.clone());
        if self.undo_stack.len() > UNDO_LIMIT {
            self.undo_stack.remove(0);
        }
    }
}
