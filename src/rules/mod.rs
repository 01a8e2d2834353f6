//! Rule implementations for acrolint.
//!
//! Each rule has a `check_*_issues(ctx)` entry point that pulls what it needs
//! from the `AnalysisContext`, and a pure `check_*` function that takes only
//! those inputs and returns a specific issue type.
//!
//! ## Module Structure
//!
//! - `informal`: Acronyms introduced in parentheses but never defined
//! - `typed_form`: Long forms typed out instead of referencing the glossary
//! - `references`: Reference macros pointing at undefined keys
//! - `unused`: Glossary entries never used
//! - `notes`: Duplicate definitions, unparseable definitions, skipped and unreachable files

pub mod informal;
pub mod notes;
pub mod references;
pub mod typed_form;
pub mod unused;

use crate::{core::AnalysisContext, issues::Issue};

/// Run every rule and collect the issues, unsorted.
pub fn check_all(ctx: &AnalysisContext) -> Vec<Issue> {
    let mut issues: Vec<Issue> = Vec::new();

    issues.extend(
        informal::check_undefined_informal_issues(ctx)
            .into_iter()
            .map(Issue::UndefinedInformal),
    );
    issues.extend(
        typed_form::check_typed_full_form_issues(ctx)
            .into_iter()
            .map(Issue::TypedFullForm),
    );
    issues.extend(
        references::check_undefined_reference_issues(ctx)
            .into_iter()
            .map(Issue::UndefinedReference),
    );
    issues.extend(
        unused::check_unused_entry_issues(ctx)
            .into_iter()
            .map(Issue::UnusedEntry),
    );
    issues.extend(
        notes::check_duplicate_definition_issues(ctx)
            .into_iter()
            .map(Issue::DuplicateDefinition),
    );
    issues.extend(
        notes::check_parse_ambiguity_issues(ctx)
            .into_iter()
            .map(Issue::ParseAmbiguity),
    );
    issues.extend(
        notes::check_skipped_file_issues(ctx)
            .into_iter()
            .map(Issue::SkippedFile),
    );
    issues.extend(
        notes::check_unreachable_file_issues(ctx)
            .into_iter()
            .map(Issue::UnreachableFile),
    );

    issues
}
