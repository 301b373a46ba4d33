//! Solid CRUD operations

use shared::Solid;

use super::{SceneSolid, SceneState, SolidId};

impl SceneState {
    /// Add an extruded solid, returning its new ID
    pub fn add_solid(&mut self, solid: Solid, height: f64) -> SolidId {
        self.save_undo();
        self.redo_stack.clear();

        let id = uuid::Uuid::new_v4().to_string();
        let name = format!("Extrusion {}", self.scene.solids.len() + 1);
        tracing::info!("Added {name} ({} vertices, height {height})", solid.vertex_count());

        self.scene.solids.push(SceneSolid {
            id: id.clone(),
            name,
            height,
            solid,
            visible: true,
        });

        self.version += 1;
        id
    }

    /// Remove a solid by ID. Returns false if not found.
    pub fn remove_solid(&mut self, id: &str) -> bool {
        let Some(index) = self.scene.solids.iter().position(|s| s.id == id) else {
            return false;
        };
        self.save_undo();
        self.redo_stack.clear();
        self.scene.solids.remove(index);
        self.version += 1;
        true
    }

    /// Show or hide a solid. Not recorded in history.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        match self.scene.solids.iter_mut().find(|s| s.id == id) {
            Some(s) => {
                s.visible = visible;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Remove all solids
    pub fn clear(&mut self) {
        if self.scene.solids.is_empty() {
            return;
        }
        self.save_undo();
        self.redo_stack.clear();
        self.scene.solids.clear();
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::super::UNDO_LIMIT;
    use super::*;
    use crate::build::extrude;
    use crate::fixtures::square_profile;

    fn cube() -> Solid {
        extrude(&square_profile(1.0), 1.0).unwrap()
    }

    #[test]
    fn test_add_solid() {
        let mut scene = SceneState::default();
        let id = scene.add_solid(cube(), 1.0);
        assert_eq!(scene.len(), 1);
        let s = scene.get(&id).unwrap();
        assert_eq!(s.name, "Extrusion 1");
        assert!(s.visible);
        assert_eq!(scene.version(), 1);
    }

    #[test]
    fn test_ids_unique() {
        let mut scene = SceneState::default();
        let a = scene.add_solid(cube(), 1.0);
        let b = scene.add_solid(cube(), 1.0);
        assert_ne!(a, b);
        assert_eq!(scene.last().unwrap().name, "Extrusion 2");
    }

    #[test]
    fn test_remove_solid() {
        let mut scene = SceneState::default();
        let id = scene.add_solid(cube(), 1.0);
        assert!(scene.remove_solid(&id));
        assert!(scene.is_empty());
        assert!(!scene.remove_solid(&id));
    }

    #[test]
    fn test_undo_redo() {
        let mut scene = SceneState::default();
        scene.add_solid(cube(), 1.0);
        scene.add_solid(cube(), 2.0);
        assert!(scene.can_undo());

        scene.undo();
        assert_eq!(scene.len(), 1);
        assert!(scene.can_redo());

        scene.redo();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.last().unwrap().height, 2.0);
    }

    #[test]
    fn test_new_solid_clears_redo() {
        let mut scene = SceneState::default();
        scene.add_solid(cube(), 1.0);
        scene.undo();
        scene.add_solid(cube(), 3.0);
        assert!(!scene.can_redo());
    }

    #[test]
    fn test_undo_stack_capped() {
        let mut scene = SceneState::default();
        for _ in 0..(UNDO_LIMIT + 10) {
            scene.add_solid(cube(), 1.0);
        }
        assert_eq!(scene.undo_stack.len(), UNDO_LIMIT);
    }

    #[test]
    fn test_hide_not_in_history() {
        let mut scene = SceneState::default();
        let id = scene.add_solid(cube(), 1.0);
        assert!(scene.set_visible(&id, false));
        assert!(!scene.get(&id).unwrap().visible);
        scene.undo();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut scene = SceneState::default();
        scene.add_solid(cube(), 1.0);
        scene.clear();
        assert!(scene.is_empty());
        scene.undo();
        assert_eq!(scene.len(), 1);
    }
}
