// StudyLens - core/mod.rs
//
// Core business logic layer.
// Dependencies: util, serde.
// Must NOT depend on: ui, platform, app, or egui.

pub mod analyzer;
pub mod model;
pub mod report;
