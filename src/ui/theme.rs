// StudyLens - ui/theme.rs
//
// Colour scheme, section colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::report::SectionKind;
use egui::Color32;

/// Accent colour for a result section.
pub fn section_accent(kind: SectionKind) -> Color32 {
    match kind {
        SectionKind::Summary => Color32::from_rgb(59, 130, 246),     // Blue 500
        SectionKind::KeyPoints => Color32::from_rgb(34, 197, 94),    // Green 500
        SectionKind::StudyNotes => Color32::from_rgb(234, 179, 8),   // Yellow 500
        SectionKind::Questions => Color32::from_rgb(168, 85, 247),   // Purple 500
    }
}

/// Subtle background fill for a result section.
pub fn section_fill(kind: SectionKind) -> Color32 {
    let accent = section_accent(kind);
    Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 28)
}

/// Colour of the question ordinal label ("Q1:").
pub const QUESTION_LABEL: Color32 = Color32::from_rgb(147, 51, 234); // Purple 600

/// Analyse button fill.
pub const ANALYZE_BUTTON: Color32 = Color32::from_rgb(239, 68, 68); // Red 500

/// Drop zone border, idle and while files hover over the window.
pub const DROP_ZONE_IDLE: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400
pub const DROP_ZONE_HOVER: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500

/// Layout constants.
pub const CONTENT_MAX_WIDTH: f32 = 720.0;
pub const DROP_ZONE_HEIGHT: f32 = 150.0;
pub const ANALYZE_BUTTON_HEIGHT: f32 = 40.0;
pub const SECTION_SPACING: f32 = 12.0;
