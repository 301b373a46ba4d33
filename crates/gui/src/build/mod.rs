//! Solid building from sketch profiles.

pub mod extrude_builder;

pub use extrude_builder::{extrude, extrude_sketch, validate_height};
