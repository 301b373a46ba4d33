// Library crate: exposes testable modules for integration tests and the command interface.
// Window, panels and painter drawing remain in the binary crate.

pub mod build;
pub mod command;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod interaction;
pub mod profile;
pub mod state;
pub mod validation;

/// Camera and screen/plane conversion used by the sketch pipeline.
/// Drawing code stays in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod unproject;
}
