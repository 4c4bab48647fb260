// StudyLens - core/report.rs
//
// Layout of an analysis result for display and clipboard export.
// Core layer: no egui types; the UI renders whatever `sections` returns.

use crate::core::model::AnalysisResult;

/// Which of the four fixed result sections this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    KeyPoints,
    StudyNotes,
    Questions,
}

impl SectionKind {
    /// Heading shown above the section.
    pub fn title(self) -> &'static str {
        match self {
            Self::Summary => "DOCUMENT SUMMARY",
            Self::KeyPoints => "KEY POINTS",
            Self::StudyNotes => "STUDY NOTES",
            Self::Questions => "STUDY QUESTIONS",
        }
    }
}

/// One visual row inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRow<'a> {
    /// Ordinal label such as "Q1:"; only questions carry one.
    pub label: Option<String>,
    pub text: &'a str,
}

/// A section and its rows, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSection<'a> {
    pub kind: SectionKind,
    pub rows: Vec<SectionRow<'a>>,
}

/// Lay out `result` as the four fixed sections: summary, key points, study
/// notes, questions. List sections get one row per element in order.
pub fn sections(result: &AnalysisResult) -> [ResultSection<'_>; 4] {
    [
        ResultSection {
            kind: SectionKind::Summary,
            rows: vec![SectionRow {
                label: None,
                text: result.summary.as_str(),
            }],
        },
        ResultSection {
            kind: SectionKind::KeyPoints,
            rows: plain_rows(&result.key_points),
        },
        ResultSection {
            kind: SectionKind::StudyNotes,
            rows: plain_rows(&result.study_notes),
        },
        ResultSection {
            kind: SectionKind::Questions,
            rows: result
                .questions
                .iter()
                .enumerate()
                .map(|(i, text)| SectionRow {
                    label: Some(format!("Q{}:", i + 1)),
                    text: text.as_str(),
                })
                .collect(),
        },
    ]
}

fn plain_rows(items: &[String]) -> Vec<SectionRow<'_>> {
    items
        .iter()
        .map(|text| SectionRow {
            label: None,
            text: text.as_str(),
        })
        .collect()
}

/// Plain-text report of `result` for the clipboard.
pub fn text_report(result: &AnalysisResult, file_name: &str) -> String {
    let mut out = format!("Study material for {file_name}\n");
    for section in sections(result) {
        out.push('\n');
        out.push_str(section.kind.title());
        out.push('\n');
        for row in &section.rows {
            match (&row.label, section.kind) {
                (Some(label), _) => out.push_str(&format!("{label} {}\n", row.text)),
                (None, SectionKind::Summary) => out.push_str(&format!("{}\n", row.text)),
                (None, _) => out.push_str(&format!("- {}\n", row.text)),
            }
        }
    }
    out
}

/// Pretty-printed JSON of `result`.
pub fn json_report(result: &AnalysisResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
