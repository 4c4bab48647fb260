// StudyLens - app/mod.rs
//
// Application layer: state machine and background analysis orchestration.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod analysis;
pub mod state;
