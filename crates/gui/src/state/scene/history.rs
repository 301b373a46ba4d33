//! Undo/redo of scene snapshots

use super::{SceneDescription, SceneState};

impl SceneState {
    /// Restore the previous scene. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.undo_stack.pop() else {
            return false;
        };
        self.swap_in(prev, false);
        tracing::debug!("Undo: {} solids", self.scene.solids.len());
        true
    }

    /// Reapply the last undone change. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.swap_in(next, true);
        tracing::debug!("Redo: {} solids", self.scene.solids.len());
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn swap_in(&mut self, snapshot: SceneDescription, forward: bool) {
        let current = std::mem::replace(&mut self.scene, snapshot);
        if forward {
            self.undo_stack.push(current);
        } else {
            self.redo_stack.push(current);
        }
        self.version += 1;
    }
}
