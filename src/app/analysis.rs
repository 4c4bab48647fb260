// StudyLens - app/analysis.rs
//
// Analysis lifecycle management. Runs the injected `Analyzer` on a
// background thread and sends progress messages to the UI thread via an
// mpsc channel.
//
// Architecture:
//   - `AnalysisManager` lives on the UI thread; `run_analysis` runs on a
//     worker thread, one per request.
//   - Runs are not cancellable. A worker always finishes and reports; the
//     state holder applies it only if the run id is the active one.
//   - All cross-thread communication is via `AnalysisProgress` messages.

use crate::core::analyzer::Analyzer;
use crate::core::model::AnalysisProgress;
use crate::util::constants;
use std::sync::{mpsc, Arc};

/// A request to analyse one file, produced by `AppState::begin_analysis`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub run_id: u64,
    pub file_name: String,
}

/// Dispatches analysis requests to background threads.
pub struct AnalysisManager {
    analyzer: Arc<dyn Analyzer>,

    /// Cloned into every worker.
    progress_tx: mpsc::Sender<AnalysisProgress>,

    /// Polled by the UI once per frame.
    progress_rx: mpsc::Receiver<AnalysisProgress>,
}

impl AnalysisManager {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        let (progress_tx, progress_rx) = mpsc::channel();
        Self {
            analyzer,
            progress_tx,
            progress_rx,
        }
    }

    /// Start analysing `request.file_name` on a background thread.
    ///
    /// Returns immediately; the outcome arrives via `poll_progress`.
    pub fn start(&self, request: AnalysisRequest) {
        let analyzer = Arc::clone(&self.analyzer);
        let tx = self.progress_tx.clone();

        tracing::info!(
            run_id = request.run_id,
            file = %request.file_name,
            "Analysis started"
        );

        std::thread::spawn(move || run_analysis(analyzer.as_ref(), request, tx));
    }

    /// Poll for progress messages without blocking.
    ///
    /// At most `MAX_ANALYSIS_MESSAGES_PER_FRAME` messages are returned; any
    /// remainder stays queued for the next frame.
    pub fn poll_progress(&self) -> Vec<AnalysisProgress> {
        let mut messages = Vec::new();
        while messages.len() < constants::MAX_ANALYSIS_MESSAGES_PER_FRAME {
            match self.progress_rx.try_recv() {
                Ok(msg) => messages.push(msg),
                Err(_) => break,
            }
        }
        messages
    }
}

/// Worker body: run the analyzer and report the outcome.
fn run_analysis(
    analyzer: &dyn Analyzer,
    request: AnalysisRequest,
    tx: mpsc::Sender<AnalysisProgress>,
) {
    let AnalysisRequest { run_id, file_name } = request;

    // Receiver dropped means the UI has closed; nothing left to report to.
    if tx
        .send(AnalysisProgress::Started {
            run_id,
            file_name: file_name.clone(),
        })
        .is_err()
    {
        return;
    }

    let msg = match analyzer.analyze(&file_name) {
        Ok(result) => AnalysisProgress::Completed { run_id, result },
        Err(error) => AnalysisProgress::Failed { run_id, error },
    };
    if tx.send(msg).is_err() {
        tracing::debug!(run_id, "UI closed before analysis result was delivered");
    }
}
