//! Undefined glossary reference detection rule.

use crate::{
    core::{AnalysisContext, Glossary, Occurrence, OccurrenceKind},
    issues::UndefinedReferenceIssue,
};

pub fn check_undefined_reference_issues(ctx: &AnalysisContext) -> Vec<UndefinedReferenceIssue> {
    check_undefined_references(ctx.occurrences(), ctx.glossary())
}

/// Reference macros (`\gls{key}`, `\ac{key}`, ...) whose key was never defined.
pub fn check_undefined_references(
    occurrences: &[Occurrence],
    glossary: &Glossary,
) -> Vec<UndefinedReferenceIssue> {
    occurrences
        .iter()
        .filter_map(|occurrence| match &occurrence.kind {
            OccurrenceKind::GlossaryReference { macro_name, key } if glossary.get(key).is_none() => {
                Some(UndefinedReferenceIssue {
                    context: occurrence.context.clone(),
                    macro_name: macro_name.clone(),
                    key: key.clone(),
                })
            }
            _ => None,
        })
        .collect()
}
