// StudyLens - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use crate::util::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// Selected file
// =============================================================================

/// A user-chosen document.
///
/// Only the name is consulted by analysis; the path is kept for display and
/// is `None` when the selection came from a source without one (e.g. some
/// drag-and-drop backends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Display name, normally the final path component.
    pub name: String,

    /// Where the file lives on disk, if known.
    pub path: Option<PathBuf>,
}

impl SelectedFile {
    /// Build a selection from a filesystem path. The name is the final path
    /// component, falling back to the whole path for roots and odd inputs.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: Some(path.to_path_buf()),
        }
    }

    /// Build a selection that only carries a name.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    /// Lower-cased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }

    /// True when the extension is one the upload control suggests.
    ///
    /// Advisory only: a `false` here never blocks selection or analysis.
    pub fn has_suggested_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| constants::SUGGESTED_EXTENSIONS.contains(&ext.as_str()))
    }
}

// =============================================================================
// Analysis result
// =============================================================================

/// The output of one analysis run. All four fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub study_notes: Vec<String>,
    pub questions: Vec<String>,
}

// =============================================================================
// Phase
// =============================================================================

/// The two user-observable phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Analyzing,
}

impl AnalysisPhase {
    /// Derive the phase from the "analysis in flight" flag.
    pub fn from_flag(analyzing: bool) -> Self {
        if analyzing {
            Self::Analyzing
        } else {
            Self::Idle
        }
    }
}

/// Full view state of the upload/analyze/render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing selected yet (initial state).
    IdleNoFile,
    /// A file is selected and no result is shown.
    IdleFileSelected,
    /// An analysis run is in flight.
    Analyzing,
    /// A result for the selected file is shown.
    IdleResulted,
}

// =============================================================================
// Progress messages (background thread -> UI thread)
// =============================================================================

/// Message sent from an analysis worker to the UI thread.
///
/// `run_id` identifies the run that produced the message; the UI ignores
/// messages for any run other than the active one.
#[derive(Debug)]
pub enum AnalysisProgress {
    /// The worker picked up the request and started processing.
    Started { run_id: u64, file_name: String },

    /// The run produced a result.
    Completed { run_id: u64, result: AnalysisResult },

    /// The run failed.
    Failed { run_id: u64, error: AnalysisError },
}

impl AnalysisProgress {
    /// The run this message belongs to.
    pub fn run_id(&self) -> u64 {
        match self {
            Self::Started { run_id, .. }
            | Self::Completed { run_id, .. }
            | Self::Failed { run_id, .. } => *run_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_file_from_path_uses_file_name() {
        let file = SelectedFile::from_path(Path::new("/home/me/docs/math_notes.pdf"));
        assert_eq!(file.name, "math_notes.pdf");
        assert_eq!(
            file.path.as_deref(),
            Some(Path::new("/home/me/docs/math_notes.pdf"))
        );
    }

    #[test]
    fn test_suggested_extension_is_case_insensitive() {
        assert!(SelectedFile::from_name("Essay.DOCX").has_suggested_extension());
        assert!(SelectedFile::from_name("notes.txt").has_suggested_extension());
        assert!(!SelectedFile::from_name("slides.pptx").has_suggested_extension());
        assert!(!SelectedFile::from_name("README").has_suggested_extension());
    }

    #[test]
    fn test_phase_derived_from_flag() {
        assert_eq!(AnalysisPhase::from_flag(false), AnalysisPhase::Idle);
        assert_eq!(AnalysisPhase::from_flag(true), AnalysisPhase::Analyzing);
    }

    #[test]
    fn test_result_serialises_with_camel_case_fields() {
        let result = AnalysisResult {
            summary: "s".to_string(),
            key_points: vec!["k".to_string()],
            study_notes: vec!["n".to_string()],
            questions: vec!["q".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["summary"], "s");
        assert_eq!(json["keyPoints"][0], "k");
        assert_eq!(json["studyNotes"][0], "n");
        assert_eq!(json["questions"][0], "q");
    }
}
