//! Non-fatal observations made while reading the document.
//!
//! None of these change the classification of an acronym; they surface as
//! warnings in the terminal and in the report's Notes section.

use std::path::Path;

use crate::{
    core::{
        AnalysisContext, AnalysisError,
        collect::{DocumentSet, display_path},
        glossary::DuplicateDefinition,
    },
    issues::{
        DuplicateDefinitionIssue, ParseAmbiguityIssue, SkippedFileIssue, UnreachableFileIssue,
    },
};

pub fn check_duplicate_definition_issues(ctx: &AnalysisContext) -> Vec<DuplicateDefinitionIssue> {
    check_duplicate_definitions(&ctx.glossary_extraction().duplicates, &ctx.documents)
}

pub fn check_duplicate_definitions(
    duplicates: &[DuplicateDefinition],
    documents: &DocumentSet,
) -> Vec<DuplicateDefinitionIssue> {
    duplicates
        .iter()
        .map(|dup| DuplicateDefinitionIssue {
            context: documents.context_at(&dup.location),
            key: dup.key.clone(),
            previous: dup.previous.clone(),
            policy: dup.policy,
        })
        .collect()
}

pub fn check_parse_ambiguity_issues(ctx: &AnalysisContext) -> Vec<ParseAmbiguityIssue> {
    check_parse_ambiguities(&ctx.glossary_extraction().ambiguities, &ctx.documents)
}

pub fn check_parse_ambiguities(
    ambiguities: &[AnalysisError],
    documents: &DocumentSet,
) -> Vec<ParseAmbiguityIssue> {
    ambiguities
        .iter()
        .filter_map(|err| match err {
            AnalysisError::ParseAmbiguity {
                location,
                macro_name,
                reason,
            } => Some(ParseAmbiguityIssue {
                context: documents.context_at(location),
                macro_name: macro_name.clone(),
                reason: reason.clone(),
            }),
            _ => None,
        })
        .collect()
}

pub fn check_skipped_file_issues(ctx: &AnalysisContext) -> Vec<SkippedFileIssue> {
    check_skipped_files(ctx.skipped_files(), &ctx.root_dir)
}

pub fn check_skipped_files(skipped: &[AnalysisError], root: &Path) -> Vec<SkippedFileIssue> {
    skipped
        .iter()
        .filter_map(|err| match err {
            AnalysisError::Unreadable { path, source } => Some(SkippedFileIssue {
                file_path: display_path(root, path),
                error: format!("could not be read, skipped: {}", source),
            }),
            _ => None,
        })
        .collect()
}

pub fn check_unreachable_file_issues(ctx: &AnalysisContext) -> Vec<UnreachableFileIssue> {
    ctx.unreachable_files()
        .iter()
        .map(|path| UnreachableFileIssue {
            file_path: path.clone(),
        })
        .collect()
}
