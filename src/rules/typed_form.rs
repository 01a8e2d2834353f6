//! Typed-out long form detection rule.
//!
//! Reports every place where the long form of a glossary acronym is written
//! out by hand instead of going through a reference macro.

use crate::{
    core::{AnalysisContext, Analysis, Classification, Glossary, OccurrenceKind},
    issues::TypedFullFormIssue,
};

pub fn check_typed_full_form_issues(ctx: &AnalysisContext) -> Vec<TypedFullFormIssue> {
    check_typed_full_form(ctx.analysis(), ctx.glossary())
}

/// One issue per typed occurrence.
pub fn check_typed_full_form(analysis: &Analysis, glossary: &Glossary) -> Vec<TypedFullFormIssue> {
    let mut issues = Vec::new();

    for finding in analysis.with_classification(Classification::InconsistentTypedForm) {
        let Some(entry) = glossary.by_short(&finding.acronym) else {
            continue;
        };
        for occurrence in &finding.occurrences {
            let OccurrenceKind::TypedFullForm { text } = &occurrence.kind else {
                continue;
            };
            issues.push(TypedFullFormIssue {
                context: occurrence.context.clone(),
                acronym: finding.acronym.clone(),
                key: entry.key.clone(),
                text: text.clone(),
                hint: format!("use \\gls{{{}}} (or \\glspl{{{}}} for the plural)", entry.key, entry.key),
            });
        }
    }

    issues
}
