// StudyLens - core/analyzer.rs
//
// Document analysis capability.
//
// `Analyzer` is the seam between the app layer and whatever produces study
// material. `MockAnalyzer` is the placeholder shipped today: it waits a fixed
// latency and returns canned material whose summary depends only on the file
// name. Nothing is read from disk.

use crate::core::model::AnalysisResult;
use crate::util::constants;
use crate::util::error::AnalysisError;
use std::time::Duration;

/// Produces study material for a document.
///
/// Implementations are called on a background thread and may block.
pub trait Analyzer: Send + Sync {
    /// Analyse the document called `file_name`.
    fn analyze(&self, file_name: &str) -> Result<AnalysisResult, AnalysisError>;
}

// =============================================================================
// Canned material
// =============================================================================

const TOPIC_MATH: &str = "mathematical concepts";
const TOPIC_HISTORY: &str = "historical events";
const TOPIC_GENERIC: &str = "academic content";

const KEY_POINTS: [&str; 4] = [
    "Main concept: Core principles and definitions",
    "Important formulas or facts highlighted",
    "Critical thinking questions identified",
    "Practice problems or examples noted",
];

const STUDY_NOTES: [&str; 4] = [
    "\u{1f4da} **Key Term 1**: Essential definition and context",
    "\u{1f50d} **Important Concept**: Detailed explanation with examples",
    "\u{1f4a1} **Study Tip**: Memory technique or learning strategy",
    "\u{26a1} **Quick Review**: Summary of main points",
];

const QUESTIONS: [&str; 4] = [
    "What are the main principles discussed in this document?",
    "How do these concepts relate to previous topics?",
    "What are some practical applications?",
    "What questions might appear on an exam?",
];

/// Pick the summary topic from the file name.
///
/// Case-sensitive substring checks, first match wins: "math" before "history".
pub fn summary_topic(file_name: &str) -> &'static str {
    if file_name.contains("math") {
        TOPIC_MATH
    } else if file_name.contains("history") {
        TOPIC_HISTORY
    } else {
        TOPIC_GENERIC
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Build the canned result for `file_name` without any delay.
pub fn canned_result(file_name: &str) -> AnalysisResult {
    AnalysisResult {
        summary: format!(
            "This document appears to be about {}. The AI has identified key concepts \
             and generated study materials.",
            summary_topic(file_name)
        ),
        key_points: owned(&KEY_POINTS),
        study_notes: owned(&STUDY_NOTES),
        questions: owned(&QUESTIONS),
    }
}

// =============================================================================
// MockAnalyzer
// =============================================================================

/// Placeholder analyzer: sleeps for `latency`, then returns `canned_result`.
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    latency: Duration,
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(constants::DEFAULT_ANALYSIS_DELAY_MS))
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for MockAnalyzer {
    fn analyze(&self, file_name: &str) -> Result<AnalysisResult, AnalysisError> {
        tracing::debug!(
            file = file_name,
            latency_ms = self.latency.as_millis() as u64,
            "Mock analysis started"
        );
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        let result = canned_result(file_name);
        tracing::debug!(file = file_name, topic = summary_topic(file_name), "Mock analysis done");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn instant() -> MockAnalyzer {
        MockAnalyzer::with_latency(Duration::ZERO)
    }

    #[test]
    fn test_math_names_get_math_summary() {
        for name in ["math_notes.pdf", "applied-mathematics.docx", "homework_math"] {
            let result = instant().analyze(name).unwrap();
            assert!(
                result.summary.contains("mathematical concepts"),
                "'{name}' should produce the mathematics summary, got: {}",
                result.summary
            );
        }
    }

    #[test]
    fn test_history_names_get_history_summary() {
        for name in ["history_101.txt", "world-history.pdf"] {
            let result = instant().analyze(name).unwrap();
            assert!(
                result.summary.contains("historical events"),
                "'{name}' should produce the history summary, got: {}",
                result.summary
            );
        }
    }

    #[test]
    fn test_math_takes_precedence_over_history() {
        assert_eq!(summary_topic("history_of_math.pdf"), "mathematical concepts");
        assert_eq!(summary_topic("math_history.pdf"), "mathematical concepts");
    }

    #[test]
    fn test_other_names_fall_back_to_generic_summary() {
        for name in ["notes.txt", "", "biology.pdf", "Math_Notes.pdf", "HISTORY.txt"] {
            assert_eq!(
                summary_topic(name),
                "academic content",
                "'{name}' must use the generic summary (matching is case-sensitive)"
            );
        }
    }

    #[test]
    fn test_summary_sentence_is_exact() {
        let result = canned_result("notes.txt");
        assert_eq!(
            result.summary,
            "This document appears to be about academic content. The AI has identified \
             key concepts and generated study materials."
        );
    }

    #[test]
    fn test_lists_are_constant_across_inputs() {
        let expected_points = vec![
            "Main concept: Core principles and definitions",
            "Important formulas or facts highlighted",
            "Critical thinking questions identified",
            "Practice problems or examples noted",
        ];
        let expected_notes = vec![
            "📚 **Key Term 1**: Essential definition and context",
            "🔍 **Important Concept**: Detailed explanation with examples",
            "💡 **Study Tip**: Memory technique or learning strategy",
            "⚡ **Quick Review**: Summary of main points",
        ];
        let expected_questions = vec![
            "What are the main principles discussed in this document?",
            "How do these concepts relate to previous topics?",
            "What are some practical applications?",
            "What questions might appear on an exam?",
        ];

        for name in ["math_notes.pdf", "history_101.txt", "anything.bin", ""] {
            let result = canned_result(name);
            assert_eq!(result.key_points, expected_points, "key points for '{name}'");
            assert_eq!(result.study_notes, expected_notes, "study notes for '{name}'");
            assert_eq!(result.questions, expected_questions, "questions for '{name}'");
        }
    }

    #[test]
    fn test_study_note_emoji_have_no_variation_selector() {
        let first_chars: Vec<u32> = canned_result("notes.txt")
            .study_notes
            .iter()
            .map(|n| n.chars().next().map(u32::from).unwrap_or_default())
            .collect();
        assert_eq!(first_chars, vec![0x1f4da, 0x1f50d, 0x1f4a1, 0x26a1]);
        for note in canned_result("notes.txt").study_notes {
            assert!(!note.contains('\u{fe0f}'), "unexpected variation selector in {note:?}");
        }
    }

    #[test]
    fn test_default_latency_is_two_seconds() {
        assert_eq!(MockAnalyzer::default().latency(), Duration::from_millis(2_000));
    }

    #[test]
    fn test_latency_is_applied() {
        let analyzer = MockAnalyzer::with_latency(Duration::from_millis(30));
        let start = Instant::now();
        analyzer.analyze("notes.txt").unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
