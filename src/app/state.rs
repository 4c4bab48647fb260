// StudyLens - app/state.rs
//
// Application state: the selected file, the current result, and the
// Idle/Analyzing cycle. Owned by the eframe::App implementation; mutated only
// on the UI thread.
//
// Transitions:
//   select_file        Idle states        -> IdleFileSelected (result cleared)
//                      Analyzing          -> Analyzing (result cleared, run continues)
//   begin_analysis     file selected, Idle -> Analyzing (otherwise no-op)
//   Completed          Analyzing          -> IdleResulted
//   Failed             Analyzing          -> IdleFileSelected (file kept)
//
// A run cannot be interrupted: the trigger stays disabled until its worker
// reports. Messages carrying any other run id are ignored.

use crate::app::analysis::AnalysisRequest;
use crate::core::model::{AnalysisPhase, AnalysisProgress, AnalysisResult, SelectedFile, ViewState};
use chrono::{DateTime, Local};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The current document selection.
    pub selected_file: Option<SelectedFile>,

    /// Result of the most recent completed run.
    pub result: Option<AnalysisResult>,

    /// Name of the file `result` was produced from. Differs from the
    /// selection when the user re-selected while that run was in flight.
    pub result_file_name: Option<String>,

    /// True while a run is in flight for the current selection.
    pub analyzing: bool,

    /// Run in flight and the file name it was started for.
    active_run: Option<(u64, String)>,

    /// Next run id to hand out.
    next_run_id: u64,

    /// When the displayed result was produced (local time).
    pub analysed_at: Option<DateTime<Local>>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    pub fn new(debug_mode: bool) -> Self {
        Self {
            selected_file: None,
            result: None,
            result_file_name: None,
            analyzing: false,
            active_run: None,
            next_run_id: 1,
            analysed_at: None,
            status_message: "Ready. Choose a document to analyse.".to_string(),
            show_about: false,
            debug_mode,
        }
    }

    pub fn phase(&self) -> AnalysisPhase {
        AnalysisPhase::from_flag(self.analyzing)
    }

    pub fn view_state(&self) -> ViewState {
        match (self.analyzing, &self.selected_file, &self.result) {
            (true, _, _) => ViewState::Analyzing,
            (false, None, _) => ViewState::IdleNoFile,
            (false, Some(_), None) => ViewState::IdleFileSelected,
            (false, Some(_), Some(_)) => ViewState::IdleResulted,
        }
    }

    /// Store `file` as the current selection and discard any result.
    ///
    /// Allowed in every state. A run in flight is not affected: it keeps
    /// Analyzing and its outcome is applied when the worker reports.
    pub fn select_file(&mut self, file: SelectedFile) {
        if let Some((run_id, _)) = &self.active_run {
            tracing::debug!(run_id = *run_id, "File re-selected while analysis in flight");
        }
        if !file.has_suggested_extension() {
            tracing::debug!(
                file = %file.name,
                "Selected file is not PDF/TXT/DOCX; analysing anyway"
            );
        }
        tracing::info!(file = %file.name, "File selected");

        if !self.analyzing {
            self.status_message = format!("Selected {}.", file.name);
        }
        self.selected_file = Some(file);
        self.result = None;
        self.result_file_name = None;
        self.analysed_at = None;
    }

    /// True when the analyse action should be enabled.
    pub fn can_analyze(&self) -> bool {
        self.selected_file.is_some() && !self.analyzing
    }

    /// Enter Analyzing and return the request to dispatch.
    ///
    /// Returns `None` (and changes nothing) when no file is selected or a
    /// run is already in flight.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if !self.can_analyze() {
            return None;
        }
        let file_name = self.selected_file.as_ref()?.name.clone();

        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.active_run = Some((run_id, file_name.clone()));
        self.analyzing = true;
        self.status_message = format!("Analysing {file_name}...");

        Some(AnalysisRequest { run_id, file_name })
    }

    /// Apply one message from an analysis worker.
    pub fn apply_progress(&mut self, msg: AnalysisProgress) {
        if self.active_run.as_ref().map(|(id, _)| *id) != Some(msg.run_id()) {
            tracing::debug!(run_id = msg.run_id(), "Ignoring message from unknown run");
            return;
        }

        match msg {
            AnalysisProgress::Started { run_id, file_name } => {
                tracing::debug!(run_id, file = %file_name, "Worker picked up analysis");
            }
            AnalysisProgress::Completed { run_id, result } => {
                tracing::info!(run_id, "Analysis completed");
                self.result_file_name = self.active_run.take().map(|(_, name)| name);
                self.analyzing = false;
                self.result = Some(result);
                let now = Local::now();
                self.status_message = format!("Analysis complete at {}.", now.format("%H:%M:%S"));
                self.analysed_at = Some(now);
            }
            AnalysisProgress::Failed { run_id, error } => {
                // Logged only: the UI silently returns to its pre-analysis state.
                tracing::warn!(run_id, error = %error, "Analysis failed");
                self.active_run = None;
                self.analyzing = false;
                self.result = None;
                self.result_file_name = None;
                self.analysed_at = None;
                self.status_message = match &self.selected_file {
                    Some(file) => format!("Selected {}.", file.name),
                    None => "Ready.".to_string(),
                };
            }
        }
    }

    /// The result to render: present only when Idle.
    pub fn visible_result(&self) -> Option<&AnalysisResult> {
        match self.phase() {
            AnalysisPhase::Idle => self.result.as_ref(),
            AnalysisPhase::Analyzing => None,
        }
    }
}
