// StudyLens - ui/panels/upload.rs
//
// Upload control: drop zone, browse dialog, and the analyse button.
// Files can be chosen by clicking the drop zone (native dialog) or by
// dropping them onto the window. The extension filter is a suggestion only.

use crate::app::state::AppState;
use crate::core::model::SelectedFile;
use crate::ui::theme;
use crate::util::constants;

/// What the user asked for this frame.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadAction {
    /// The analyse button was clicked while enabled.
    pub analyze_clicked: bool,
}

/// Open the native file dialog. Suggested document types are listed first;
/// "All files" keeps every file selectable.
fn browse_for_file() -> Option<SelectedFile> {
    rfd::FileDialog::new()
        .set_title("Choose a document")
        .add_filter("Documents", constants::SUGGESTED_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
        .map(|path| SelectedFile::from_path(&path))
}

/// Take the first file dropped onto the window this frame, if any.
pub fn take_dropped_file(ctx: &egui::Context) -> Option<SelectedFile> {
    ctx.input(|i| {
        i.raw.dropped_files.first().map(|dropped| match &dropped.path {
            Some(path) => SelectedFile::from_path(path),
            None => SelectedFile::from_name(dropped.name.clone()),
        })
    })
}

/// Render the upload control and the analyse button.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> UploadAction {
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let border = if hovering {
        theme::DROP_ZONE_HOVER
    } else {
        theme::DROP_ZONE_IDLE
    };

    let zone = egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, border))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_min_height(theme::DROP_ZONE_HEIGHT);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("\u{2b06}").size(36.0).color(border));
                ui.add_space(6.0);
                let headline = match &state.selected_file {
                    Some(file) => format!("SELECTED: {}", file.name),
                    None => "DRAG & DROP YOUR DOCUMENT!".to_string(),
                };
                ui.label(egui::RichText::new(headline).size(18.0).strong());
                ui.label("Or click to browse files");
                ui.label(
                    egui::RichText::new("Supports PDF, TXT, DOCX files")
                        .small()
                        .weak(),
                );
                if let Some(file) = &state.selected_file {
                    if !file.has_suggested_extension() {
                        ui.label(
                            egui::RichText::new("Not a PDF, TXT or DOCX file; it will still be analysed.")
                                .small()
                                .italics(),
                        );
                    }
                }
            });
        });

    let click = zone
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if click.clicked() {
        if let Some(file) = browse_for_file() {
            state.select_file(file);
        }
    }

    ui.add_space(theme::SECTION_SPACING);

    let label = if state.analyzing {
        "ANALYZING..."
    } else {
        "ANALYZE DOCUMENT!"
    };
    let button = egui::Button::new(
        egui::RichText::new(label)
            .size(16.0)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(theme::ANALYZE_BUTTON)
    .min_size(egui::vec2(ui.available_width(), theme::ANALYZE_BUTTON_HEIGHT));

    let analyze_clicked = ui.add_enabled(state.can_analyze(), button).clicked();

    if state.analyzing {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Working on your document...");
        });
    }

    UploadAction { analyze_clicked }
}
