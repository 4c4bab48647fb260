// StudyLens - ui/panels/mod.rs

pub mod about;
pub mod results;
pub mod upload;
