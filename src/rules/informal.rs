//! Undefined informal acronym detection rule.
//!
//! Reports acronyms that are introduced in parentheses at least
//! `informalThreshold` times without a glossary entry.

use crate::{
    core::{AnalysisContext, Analysis, Classification},
    issues::UndefinedInformalIssue,
};

pub fn check_undefined_informal_issues(ctx: &AnalysisContext) -> Vec<UndefinedInformalIssue> {
    check_undefined_informal(ctx.analysis())
}

/// One issue per undefined acronym, anchored at its first mention.
pub fn check_undefined_informal(analysis: &Analysis) -> Vec<UndefinedInformalIssue> {
    analysis
        .with_classification(Classification::UndefinedInformal)
        .filter_map(|finding| {
            let (first, rest) = finding.occurrences.split_first()?;
            Some(UndefinedInformalIssue {
                context: first.context.clone(),
                acronym: finding.acronym.clone(),
                count: finding.count(),
                expansions: finding.expansions.iter().cloned().collect(),
                usages: rest.iter().map(|o| o.context.clone()).collect(),
                suggestion: finding.suggested_definition(),
            })
        })
        .collect()
}
