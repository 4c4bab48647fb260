// StudyLens - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and manages the analysis lifecycle.

use crate::app::analysis::AnalysisManager;
use crate::app::state::AppState;
use crate::core::report;
use crate::ui;
use crate::util::constants;
use std::time::Duration;

/// The StudyLens application.
pub struct StudyLensApp {
    pub state: AppState,
    pub analysis_manager: AnalysisManager,
}

impl StudyLensApp {
    pub fn new(state: AppState, analysis_manager: AnalysisManager) -> Self {
        Self {
            state,
            analysis_manager,
        }
    }

    /// Start a run for the current selection, if the state allows one.
    fn trigger_analysis(&mut self) {
        if let Some(request) = self.state.begin_analysis() {
            self.analysis_manager.start(request);
        }
    }

    /// Copy the displayed result to the clipboard as text or JSON.
    fn copy_result(&mut self, ctx: &egui::Context, as_json: bool) {
        let (Some(result), Some(file_name)) =
            (self.state.visible_result(), &self.state.result_file_name)
        else {
            return;
        };
        if as_json {
            match report::json_report(result) {
                Ok(json) => {
                    ctx.copy_text(json);
                    self.state.status_message = "Copied results as JSON.".to_string();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to serialise results");
                    self.state.status_message = format!("Copy failed: {e}");
                }
            }
        } else {
            ctx.copy_text(report::text_report(result, file_name));
            self.state.status_message = "Copied results to clipboard.".to_string();
        }
    }
}

impl eframe::App for StudyLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll analysis progress.
        let messages = self.analysis_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            self.state.apply_progress(msg);
        }
        if had_messages {
            ctx.request_repaint();
        }
        // Keep repainting while a run is in flight so the spinner animates and
        // the completion is picked up without waiting for input.
        if self.state.analyzing {
            ctx.request_repaint_after(Duration::from_millis(
                constants::ANALYZING_REPAINT_INTERVAL_MS,
            ));
        }

        // Files dropped onto the window replace the selection.
        if let Some(file) = ui::panels::upload::take_dropped_file(ctx) {
            self.state.select_file(file);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    let has_result = self.state.visible_result().is_some();
                    ui.add_enabled_ui(has_result, |ui| {
                        if ui.button("Copy Report").clicked() {
                            self.copy_result(ctx, false);
                            ui.close_menu();
                        }
                        if ui.button("Copy JSON").clicked() {
                            self.copy_result(ctx, true);
                            ui.close_menu();
                        }
                    });
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.debug_mode {
                        ui.label(
                            egui::RichText::new(format!("{:?}", self.state.view_state()))
                                .small()
                                .weak(),
                        );
                    }
                });
            });
        });

        // Central panel: upload control, then results.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(ui::theme::CONTENT_MAX_WIDTH);
                        let action = ui::panels::upload::render(ui, &mut self.state);
                        if action.analyze_clicked {
                            self.trigger_analysis();
                        }

                        ui.add_space(ui::theme::SECTION_SPACING);
                        ui::panels::results::render(ui, self.state.visible_result());
                    });
                });
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
