// StudyLens - ui/panels/about.rs
//
// About dialog, rendered as a centred, non-resizable, non-collapsible window.

use crate::app::state::AppState;
use crate::util::constants;

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {}", constants::APP_NAME))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(constants::APP_NAME).size(26.0).strong());
                ui.label(
                    egui::RichText::new(format!("v{}", constants::APP_VERSION))
                        .size(14.0)
                        .weak(),
                );
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(6.0);

            ui.vertical_centered(|ui| {
                ui.label("Turns a document into a summary, key points,");
                ui.label("study notes and practice questions.");
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(
                        "The current analyzer is a placeholder: results are canned \
                         and only the summary depends on the file name.",
                    )
                    .small()
                    .italics(),
                );
            });

            ui.add_space(8.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            });
        });

    if !open {
        state.show_about = false;
    }
}
