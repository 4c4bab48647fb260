// StudyLens - ui/panels/results.rs
//
// Results renderer. Draws the four fixed sections of an analysis result;
// draws nothing when there is no result. Holds no state of its own.

use crate::core::model::AnalysisResult;
use crate::core::report::{self, ResultSection, SectionKind};
use crate::ui::theme;

/// Render `result`, or nothing if it is `None`.
pub fn render(ui: &mut egui::Ui, result: Option<&AnalysisResult>) {
    let Some(result) = result else {
        return;
    };

    egui::Frame::group(ui.style())
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("AI ANALYSIS RESULTS!").size(22.0).strong());
            ui.add_space(theme::SECTION_SPACING);

            for section in report::sections(result) {
                render_section(ui, &section);
                ui.add_space(theme::SECTION_SPACING);
            }
        });
}

fn render_section(ui: &mut egui::Ui, section: &ResultSection<'_>) {
    let accent = theme::section_accent(section.kind);
    egui::Frame::group(ui.style())
        .fill(theme::section_fill(section.kind))
        .stroke(egui::Stroke::new(2.0, accent))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(section.kind.title())
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(6.0);

            for row in &section.rows {
                match section.kind {
                    SectionKind::Summary => {
                        ui.label(egui::RichText::new(row.text).strong());
                    }
                    SectionKind::KeyPoints => {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new("\u{25cf}").color(accent));
                            ui.label(row.text);
                        });
                    }
                    SectionKind::StudyNotes | SectionKind::Questions => {
                        egui::Frame::group(ui.style())
                            .fill(ui.visuals().extreme_bg_color)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal_wrapped(|ui| {
                                    if let Some(label) = &row.label {
                                        ui.label(
                                            egui::RichText::new(label)
                                                .strong()
                                                .color(theme::QUESTION_LABEL),
                                        );
                                    }
                                    ui.label(row.text);
                                });
                            });
                    }
                }
            }
        });
}
