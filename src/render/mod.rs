//! Document report rendering.
//!
//! The format follows the output file extension: `.html`/`.htm` renders a
//! self-contained, print-paginated HTML page and `.md`/`.markdown` renders
//! Markdown. Rendering is a pure function of `ReportInput`; only
//! `write_report` touches the file system.

mod html;
mod markdown;

use std::{fs, path::Path};

use tracing::debug;

use crate::{
    core::{Analysis, AnalysisError, Classification, Finding, Occurrence, OccurrenceKind},
    issues::{Issue, Report, ReportLocation},
    utils::{Excerpt, excerpt},
};

pub const REPORT_TITLE: &str = "LaTeX Acronym Analysis Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Markdown,
}

impl ReportFormat {
    /// Format for `path`'s extension (case-insensitive), if supported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(ReportFormat::Html),
            "md" | "markdown" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// Run metadata shown in the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub entry: String,
    pub files: Vec<String>,
    pub glossary_entries: usize,
    pub occurrences: usize,
    pub threshold: usize,
    pub generated_at: String,
}

/// Everything a report is rendered from.
pub struct ReportInput<'a> {
    pub analysis: &'a Analysis,
    pub summary: RunSummary,
    /// Non-fatal issues for the Notes section.
    pub notes: Vec<&'a Issue>,
    /// Locations listed per acronym before "and N more".
    pub max_locations: usize,
}

impl ReportInput<'_> {
    fn summary_rows(&self) -> Vec<(&'static str, usize)> {
        let count = |c: Classification| self.analysis.with_classification(c).count();
        let typed_occurrences: usize = self
            .analysis
            .with_classification(Classification::InconsistentTypedForm)
            .map(Finding::count)
            .sum();

        vec![
            ("Files analyzed", self.summary.files.len()),
            ("Glossary entries", self.summary.glossary_entries),
            ("Acronym occurrences", self.summary.occurrences),
            (
                "Not in glossary, used informally",
                count(Classification::UndefinedInformal),
            ),
            ("In glossary, but full form typed out", typed_occurrences),
            ("Used consistently", count(Classification::Consistent)),
            ("Defined but never used", self.analysis.unused_entries.len()),
            ("Notes", self.notes.len()),
        ]
    }
}

/// Render the report as a string.
pub fn render(input: &ReportInput<'_>, format: ReportFormat) -> String {
    match format {
        ReportFormat::Html => html::render(input),
        ReportFormat::Markdown => markdown::render(input),
    }
}

/// Render in the format chosen by `path` and write the file.
///
/// Unknown extensions fall back to HTML; configuration validation normally
/// rejects them before a run starts.
pub fn write_report(path: &Path, input: &ReportInput<'_>) -> Result<ReportFormat, AnalysisError> {
    let format = ReportFormat::from_path(path).unwrap_or(ReportFormat::Html);
    let content = render(input, format);
    fs::write(path, content).map_err(|source| AnalysisError::Render {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?format, "report written");
    Ok(format)
}

/// First `max` occurrences of a finding and how many were left out.
fn sample(finding: &Finding, max: usize) -> (&[Occurrence], usize) {
    let shown = finding.occurrences.len().min(max);
    (
        &finding.occurrences[..shown],
        finding.occurrences.len() - shown,
    )
}

/// Short label for an occurrence in the location lists.
fn occurrence_label(occurrence: &Occurrence) -> String {
    match &occurrence.kind {
        OccurrenceKind::TypedFullForm { text } => format!("typed \"{}\"", text),
        kind => kind.to_string(),
    }
}

/// Excerpt of the occurrence's line with the matched text as the hit.
///
/// A parenthetical mention also highlights its expansion when it directly
/// precedes the parentheses.
fn occurrence_excerpt(occurrence: &Occurrence) -> Excerpt {
    let ctx = &occurrence.context;
    let chars: Vec<char> = ctx.source_line.chars().collect();
    let col = ctx.col();

    let (start, len) = match &occurrence.kind {
        OccurrenceKind::TypedFullForm { text } | OccurrenceKind::ShortForm { text } => {
            (col, text.chars().count())
        }
        OccurrenceKind::GlossaryReference { .. } => (col, closing_len(&chars, col, '}')),
        OccurrenceKind::ParentheticalMention { expansion } => {
            let start = expansion
                .as_deref()
                .and_then(|e| expansion_start(&chars, col, e))
                .unwrap_or(col);
            (start, col - start + closing_len(&chars, col, ')'))
        }
    };
    excerpt(&ctx.source_line, start, len)
}

/// Characters from `col` up to and including the next `close`.
fn closing_len(chars: &[char], col: usize, close: char) -> usize {
    let from = col.saturating_sub(1).min(chars.len());
    chars[from..]
        .iter()
        .position(|&c| c == close)
        .map_or(0, |i| i + 1)
}

/// Column where `expansion` starts if only whitespace separates it from `col`.
fn expansion_start(chars: &[char], col: usize, expansion: &str) -> Option<usize> {
    let before: String = chars[..col.saturating_sub(1).min(chars.len())]
        .iter()
        .collect();
    let trimmed = before.trim_end();
    if expansion.is_empty() || !trimmed.ends_with(expansion) {
        return None;
    }
    Some(trimmed.chars().count() - expansion.chars().count() + 1)
}

/// `path:line:col` (or just the path) plus message for a Notes entry.
fn note_parts(issue: &Issue) -> (String, String) {
    let location = match issue.location() {
        ReportLocation::Source(ctx) => ctx.location.to_string(),
        ReportLocation::File { path } => path.to_string(),
    };
    let mut message = issue.message();
    if let Some(details) = issue.details() {
        message.push_str(&format!(" ({})", details));
    }
    (location, message)
}
