//! Issue types for acronym analysis results.
//!
//! Each issue is self-contained with everything the terminal reporter needs:
//! location, message, severity, rule id and optional note/hint lines.

use enum_dispatch::enum_dispatch;

use crate::core::{SourceContext, SourceLocation, glossary::DuplicatePolicy};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UndefinedInformal,
    TypedFullForm,
    UnusedEntry,
    UndefinedReference,
    DuplicateDefinition,
    ParseAmbiguity,
    SkippedFile,
    UnreachableFile,
}

impl Rule {
    /// Rules listed under the report's notes section rather than a
    /// classification of their own.
    pub fn is_note(self) -> bool {
        matches!(
            self,
            Rule::UndefinedReference
                | Rule::DuplicateDefinition
                | Rule::ParseAmbiguity
                | Rule::SkippedFile
                | Rule::UnreachableFile
        )
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UndefinedInformal => write!(f, "undefined-informal"),
            Rule::TypedFullForm => write!(f, "typed-full-form"),
            Rule::UnusedEntry => write!(f, "unused-entry"),
            Rule::UndefinedReference => write!(f, "undefined-reference"),
            Rule::DuplicateDefinition => write!(f, "duplicate-definition"),
            Rule::ParseAmbiguity => write!(f, "parse-ambiguity"),
            Rule::SkippedFile => write!(f, "skipped-file"),
            Rule::UnreachableFile => write!(f, "unreachable-file"),
        }
    }
}

// ============================================================
// Issue Types - Acronym Usage
// ============================================================

/// Acronym introduced in parentheses repeatedly but never defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedInformalIssue {
    /// First parenthetical mention.
    pub context: SourceContext,
    pub acronym: String,
    /// Total number of mentions, the first one included.
    pub count: usize,
    /// Informal expansions seen before the parentheses.
    pub expansions: Vec<String>,
    /// The remaining mentions.
    pub usages: Vec<SourceContext>,
    /// Suggested `\newacronym` line.
    pub suggestion: String,
}

impl UndefinedInformalIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UndefinedInformal
    }
}

/// Long form of a glossary acronym typed out in prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedFullFormIssue {
    pub context: SourceContext,
    pub acronym: String,
    /// Glossary key to reference instead.
    pub key: String,
    /// The text as typed.
    pub text: String,
    pub hint: String,
}

impl TypedFullFormIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::TypedFullForm
    }
}

/// Reference macro whose key has no definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedReferenceIssue {
    pub context: SourceContext,
    pub macro_name: String,
    pub key: String,
}

impl UndefinedReferenceIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UndefinedReference
    }
}

// ============================================================
// Issue Types - Glossary
// ============================================================

/// Glossary entry never used in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedEntryIssue {
    /// Definition in effect.
    pub context: SourceContext,
    pub key: String,
    pub short: String,
}

impl UnusedEntryIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedEntry
    }
}

/// Key defined more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDefinitionIssue {
    /// The redefinition.
    pub context: SourceContext,
    pub key: String,
    pub previous: SourceLocation,
    pub policy: DuplicatePolicy,
}

impl DuplicateDefinitionIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DuplicateDefinition
    }
}

/// Definition macro that could not be parsed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAmbiguityIssue {
    pub context: SourceContext,
    pub macro_name: String,
    pub reason: String,
}

impl ParseAmbiguityIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseAmbiguity
    }
}

// ============================================================
// Issue Types - Files (no line context)
// ============================================================

/// Included file that exists but could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFileIssue {
    pub file_path: String,
    pub error: String,
}

impl SkippedFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::SkippedFile
    }
}

/// `.tex` file under the root that the entry file never includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableFileIssue {
    pub file_path: String,
}

impl UnreachableFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnreachableFile
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An acronym issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UndefinedInformal(UndefinedInformalIssue),
    TypedFullForm(TypedFullFormIssue),
    UndefinedReference(UndefinedReferenceIssue),
    UnusedEntry(UnusedEntryIssue),
    DuplicateDefinition(DuplicateDefinitionIssue),
    ParseAmbiguity(ParseAmbiguityIssue),
    SkippedFile(SkippedFileIssue),
    UnreachableFile(UnreachableFileIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on the
/// `Issue` enum without dynamic dispatch.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Further locations of the same problem.
    fn usages(&self) -> &[SourceContext] {
        &[]
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UndefinedInformalIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("\"{}\" is used informally but never defined", self.acronym)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some(&self.suggestion)
    }

    fn details(&self) -> Option<String> {
        let mut note = format!("introduced in parentheses {} times", self.count);
        if !self.expansions.is_empty() {
            note.push_str(&format!(" as \"{}\"", self.expansions.join("\", \"")));
        }
        Some(note)
    }

    fn usages(&self) -> &[SourceContext] {
        &self.usages
    }
}

impl Report for TypedFullFormIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "\"{}\" typed out instead of referencing \"{}\"",
            self.text, self.acronym
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some(&self.hint)
    }
}

impl Report for UndefinedReferenceIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("\\{}{{{}}} refers to an undefined key", self.macro_name, self.key)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for UnusedEntryIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("\"{}\" is defined but never used", self.short)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("glossary key \"{}\"", self.key))
    }
}

impl Report for DuplicateDefinitionIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("\"{}\" is defined more than once", self.key)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let kept = match self.policy {
            DuplicatePolicy::LastWins => "this definition is used",
            DuplicatePolicy::FirstWins => "the earlier definition is used",
        };
        Some(format!("previously defined at {}; {}", self.previous, kept))
    }
}

impl Report for ParseAmbiguityIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        format!("cannot parse \\{}, definition skipped", self.macro_name)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.reason.clone())
    }
}

impl Report for SkippedFileIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for UnreachableFileIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        "not included from the entry file".to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
