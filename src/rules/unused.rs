//! Unused glossary entry detection rule.
//!
//! Detects acronyms that are defined but never referenced, mentioned or
//! typed out anywhere in the document body.

use crate::{
    core::{AcronymEntry, AnalysisContext, collect::DocumentSet},
    issues::UnusedEntryIssue,
};

pub fn check_unused_entry_issues(ctx: &AnalysisContext) -> Vec<UnusedEntryIssue> {
    check_unused_entries(&ctx.analysis().unused_entries, &ctx.documents)
}

pub fn check_unused_entries(
    unused: &[AcronymEntry],
    documents: &DocumentSet,
) -> Vec<UnusedEntryIssue> {
    let mut issues: Vec<UnusedEntryIssue> = unused
        .iter()
        .map(|entry| UnusedEntryIssue {
            context: documents.context_at(&entry.defined_at),
            key: entry.key.clone(),
            short: entry.short.clone(),
        })
        .collect();

    // Sort by file path, then line for deterministic output
    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.key.cmp(&b.key))
    });

    issues
}

#[cfg(test)]
mod tests {
    use crate::core::SourceLocation;
    use crate::rules::unused::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unused_entries_point_at_definition() {
        let docs = DocumentSet::from_single(
            "main.tex",
            "\\newacronym{ml}{ML}{Machine Learning}\n\\newacronym{ai}{AI}{Artificial Intelligence}",
        );
        let unused = vec![
            AcronymEntry::new("ai", "AI", None, SourceLocation::new("main.tex", 2, 1)),
            AcronymEntry::new("ml", "ML", None, SourceLocation::new("main.tex", 1, 1)),
        ];

        let issues = check_unused_entries(&unused, &docs);
        let keys: Vec<&str> = issues.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["ml", "ai"]);
        assert_eq!(
            issues[1].context.source_line,
            "\\newacronym{ai}{AI}{Artificial Intelligence}"
        );
    }
}
