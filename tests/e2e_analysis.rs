// StudyLens - tests/e2e_analysis.rs
//
// End-to-end tests for the select -> analyse -> render cycle.
//
// These drive the real `AppState` and `AnalysisManager` with real worker
// threads, polling the progress channel exactly as the GUI update loop does.
// Only the analyzer latency is shortened.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use studylens::app::analysis::AnalysisManager;
use studylens::app::state::AppState;
use studylens::core::analyzer::{Analyzer, MockAnalyzer};
use studylens::core::model::{AnalysisResult, SelectedFile, ViewState};
use studylens::core::report;
use studylens::util::error::AnalysisError;

// =============================================================================
// Helpers
// =============================================================================

const TEST_LATENCY: Duration = Duration::from_millis(40);

fn mock_manager() -> AnalysisManager {
    AnalysisManager::new(Arc::new(MockAnalyzer::with_latency(TEST_LATENCY)))
}

/// Poll like the GUI does until the state leaves Analyzing.
fn pump_until_idle(state: &mut AppState, manager: &AnalysisManager) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.analyzing {
        assert!(Instant::now() < deadline, "analysis did not finish in time");
        for msg in manager.poll_progress() {
            state.apply_progress(msg);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// Select `name`, trigger analysis, wait, and return the rendered summary.
fn analyse(state: &mut AppState, manager: &AnalysisManager, name: &str) -> String {
    state.select_file(SelectedFile::from_name(name));
    let request = state.begin_analysis().expect("a file is selected");
    manager.start(request);
    pump_until_idle(state, manager);
    state
        .visible_result()
        .expect("a result should be displayed after completion")
        .summary
        .clone()
}

/// Mock analyzer that records how many runs overlap.
#[derive(Default)]
struct CountingAnalyzer {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    total: AtomicUsize,
}

impl Analyzer for CountingAnalyzer {
    fn analyze(&self, file_name: &str) -> Result<AnalysisResult, AnalysisError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.total.fetch_add(1, Ordering::SeqCst);
        let result = MockAnalyzer::with_latency(TEST_LATENCY).analyze(file_name);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

struct RejectingAnalyzer;

impl Analyzer for RejectingAnalyzer {
    fn analyze(&self, file_name: &str) -> Result<AnalysisResult, AnalysisError> {
        std::thread::sleep(TEST_LATENCY);
        Err(AnalysisError::Failed {
            file_name: file_name.to_string(),
            reason: "service unavailable".to_string(),
        })
    }
}

// =============================================================================
// Happy path
// =============================================================================

/// Three files in one session, each summary following the file name.
#[test]
fn e2e_summary_follows_file_name_across_session() {
    let manager = mock_manager();
    let mut state = AppState::new(false);

    let math = analyse(&mut state, &manager, "math_notes.pdf");
    assert!(math.contains("mathematical concepts"), "got: {math}");

    let history = analyse(&mut state, &manager, "history_101.txt");
    assert!(history.contains("historical events"), "got: {history}");

    let generic = analyse(&mut state, &manager, "notes.txt");
    assert!(generic.contains("academic content"), "got: {generic}");

    assert_eq!(state.view_state(), ViewState::IdleResulted);
}

/// The result is hidden for the whole delay and only appears afterwards.
#[test]
fn e2e_result_appears_only_after_delay() {
    let manager = mock_manager();
    let mut state = AppState::new(false);
    state.select_file(SelectedFile::from_name("notes.txt"));

    let started = Instant::now();
    manager.start(state.begin_analysis().unwrap());
    assert_eq!(state.view_state(), ViewState::Analyzing);
    assert!(state.visible_result().is_none());

    pump_until_idle(&mut state, &manager);
    assert!(started.elapsed() >= TEST_LATENCY);
    assert_eq!(state.view_state(), ViewState::IdleResulted);
}

/// The displayed result renders as four sections with labelled questions.
#[test]
fn e2e_rendered_sections_for_completed_run() {
    let manager = mock_manager();
    let mut state = AppState::new(false);
    analyse(&mut state, &manager, "math_notes.pdf");

    let result = state.visible_result().unwrap();
    let sections = report::sections(result);
    let row_counts: Vec<_> = sections.iter().map(|s| s.rows.len()).collect();
    assert_eq!(row_counts, vec![1, 4, 4, 4]);
    assert_eq!(sections[3].rows[0].label.as_deref(), Some("Q1:"));
    assert_eq!(sections[3].rows[3].label.as_deref(), Some("Q4:"));
}

/// A file with an unsuggested extension is analysed like any other.
#[test]
fn e2e_unsuggested_extension_is_still_analysed() {
    let manager = mock_manager();
    let mut state = AppState::new(false);
    let summary = analyse(&mut state, &manager, "history_slides.pptx");
    assert!(summary.contains("historical events"));
}

// =============================================================================
// Edge cases
// =============================================================================

/// Triggering with nothing selected dispatches nothing and changes nothing.
#[test]
fn e2e_trigger_without_file_dispatches_nothing() {
    let manager = mock_manager();
    let mut state = AppState::new(false);

    assert!(state.begin_analysis().is_none());
    std::thread::sleep(TEST_LATENCY * 2);
    assert!(manager.poll_progress().is_empty());
    assert_eq!(state.view_state(), ViewState::IdleNoFile);
}

/// A rejecting analyzer leaves the file selected and shows no result.
#[test]
fn e2e_failure_is_swallowed_and_file_retained() {
    let manager = AnalysisManager::new(Arc::new(RejectingAnalyzer));
    let mut state = AppState::new(false);
    state.select_file(SelectedFile::from_name("notes.txt"));

    manager.start(state.begin_analysis().unwrap());
    pump_until_idle(&mut state, &manager);

    assert_eq!(state.view_state(), ViewState::IdleFileSelected);
    assert!(state.visible_result().is_none());
    assert!(
        !state.status_message.to_lowercase().contains("fail"),
        "failure must not be surfaced: {}",
        state.status_message
    );
}

/// Re-selecting mid-run neither re-enables the trigger nor starts a second
/// overlapping run; the first run still completes.
#[test]
fn e2e_reselect_during_run_keeps_trigger_disabled() {
    let analyzer = Arc::new(CountingAnalyzer::default());
    let manager = AnalysisManager::new(analyzer.clone());
    let mut state = AppState::new(false);

    state.select_file(SelectedFile::from_name("math_notes.pdf"));
    manager.start(state.begin_analysis().unwrap());

    std::thread::sleep(TEST_LATENCY / 2);
    state.select_file(SelectedFile::from_name("history_101.txt"));
    assert!(!state.can_analyze(), "trigger must stay disabled mid-run");
    assert_eq!(state.view_state(), ViewState::Analyzing);
    if let Some(request) = state.begin_analysis() {
        manager.start(request);
    }

    pump_until_idle(&mut state, &manager);
    assert_eq!(analyzer.peak.load(Ordering::SeqCst), 1, "runs must not overlap");
    assert_eq!(analyzer.total.load(Ordering::SeqCst), 1);
    assert_eq!(state.view_state(), ViewState::IdleResulted);
    assert_eq!(state.result_file_name.as_deref(), Some("math_notes.pdf"));

    // Once idle, the new selection can be analysed normally.
    let summary = analyse(&mut state, &manager, "history_101.txt");
    assert!(summary.contains("historical events"), "got: {summary}");
}
