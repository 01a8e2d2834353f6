//! Consistency analysis: classifies every observed acronym.
//!
//! This is a pure function of the glossary and the occurrence list, so it is
//! tested without touching the file system.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::core::data::{Analysis, Classification, Finding, Glossary, Occurrence, OccurrenceKind};

/// Default number of parenthetical mentions before an undefined acronym is
/// reported. A single mention is usually a one-off clarification.
pub const DEFAULT_INFORMAL_THRESHOLD: usize = 2;

/// Classify every acronym that appears in `occurrences`.
///
/// - no glossary entry and at least `threshold` parenthetical mentions:
///   `UndefinedInformal`, backed by the mentions
/// - glossary entry and at least one typed-out long form:
///   `InconsistentTypedForm`, backed by the typed occurrences
/// - anything else: `Consistent`, backed by all occurrences
///
/// A glossary entry anywhere in the document suppresses `UndefinedInformal`,
/// even for mentions that come before the definition.
///
/// Occurrences are grouped by short form. Keys sharing a short form merge
/// into one finding carrying the long form of the first key in sorted order,
/// and all of them count as used.
pub fn classify(glossary: &Glossary, occurrences: &[Occurrence], threshold: usize) -> Analysis {
    let threshold = threshold.max(1);

    let mut by_acronym: BTreeMap<&str, Vec<&Occurrence>> = BTreeMap::new();
    for occurrence in occurrences {
        by_acronym
            .entry(occurrence.acronym.as_str())
            .or_default()
            .push(occurrence);
    }

    let mut findings: Vec<Finding> = by_acronym
        .iter()
        .map(|(acronym, occs)| classify_acronym(glossary, acronym, occs, threshold))
        .collect();
    findings.sort_by(|a, b| {
        a.classification
            .cmp(&b.classification)
            .then_with(|| a.acronym.cmp(&b.acronym))
    });

    let used: HashSet<&str> = by_acronym.keys().copied().collect();
    let unused_entries = glossary
        .iter()
        .filter(|entry| !used.contains(entry.short.as_str()))
        .cloned()
        .collect();

    Analysis {
        findings,
        unused_entries,
    }
}

fn classify_acronym(
    glossary: &Glossary,
    acronym: &str,
    occurrences: &[&Occurrence],
    threshold: usize,
) -> Finding {
    let entry = glossary.by_short(acronym);

    let mentions: Vec<Occurrence> = occurrences
        .iter()
        .filter(|o| o.kind.is_parenthetical())
        .map(|o| (*o).clone())
        .collect();
    let typed: Vec<Occurrence> = occurrences
        .iter()
        .filter(|o| o.kind.is_typed_full_form())
        .map(|o| (*o).clone())
        .collect();

    let expansions: BTreeSet<String> = occurrences
        .iter()
        .filter_map(|o| match &o.kind {
            OccurrenceKind::ParentheticalMention { expansion } => expansion.clone(),
            _ => None,
        })
        .collect();

    let (classification, supporting) = match entry {
        None if mentions.len() >= threshold => (Classification::UndefinedInformal, mentions),
        Some(_) if !typed.is_empty() => (Classification::InconsistentTypedForm, typed),
        _ => (
            Classification::Consistent,
            occurrences.iter().map(|o| (*o).clone()).collect(),
        ),
    };

    Finding {
        acronym: acronym.to_string(),
        classification,
        occurrences: supporting,
        long_form: entry.and_then(|e| e.long_form.clone()),
        expansions,
    }
}

#[cfg(test)]
mod tests {
    use crate::core::analyzer::*;
    use crate::core::data::{AcronymEntry, SourceContext, SourceLocation};
    use pretty_assertions::assert_eq;

    fn glossary(entries: &[(&str, &str, &str)]) -> Glossary {
        Glossary::from_entries(entries.iter().map(|(key, short, long)| {
            AcronymEntry::new(
                *key,
                *short,
                Some(long.to_string()),
                SourceLocation::with_line("main.tex", 1),
            )
        }))
    }

    fn occurrence(acronym: &str, kind: OccurrenceKind, line: usize) -> Occurrence {
        Occurrence::new(
            acronym,
            kind,
            SourceContext::new(SourceLocation::with_line("main.tex", line), "line"),
        )
    }

    fn mention(acronym: &str, line: usize) -> Occurrence {
        occurrence(
            acronym,
            OccurrenceKind::ParentheticalMention {
                expansion: Some("Central Processing Unit".to_string()),
            },
            line,
        )
    }

    fn typed(acronym: &str, line: usize) -> Occurrence {
        occurrence(
            acronym,
            OccurrenceKind::TypedFullForm {
                text: "Machine Learning".to_string(),
            },
            line,
        )
    }

    fn reference(acronym: &str, key: &str, line: usize) -> Occurrence {
        occurrence(
            acronym,
            OccurrenceKind::GlossaryReference {
                macro_name: "gls".to_string(),
                key: key.to_string(),
            },
            line,
        )
    }

    #[test]
    fn test_no_occurrences_no_findings() {
        let analysis = classify(&Glossary::default(), &[], 2);
        assert!(analysis.findings.is_empty());
        assert!(analysis.unused_entries.is_empty());
    }

    #[test]
    fn test_defined_and_referenced_is_consistent() {
        let g = glossary(&[("ml", "ML", "Machine Learning")]);
        let analysis = classify(&g, &[reference("ML", "ml", 3), reference("ML", "ml", 5)], 2);

        let finding = analysis.finding("ML").unwrap();
        assert_eq!(finding.classification, Classification::Consistent);
        assert_eq!(finding.count(), 2);
        assert_eq!(finding.long_form.as_deref(), Some("Machine Learning"));
    }

    #[test]
    fn test_typed_full_form_is_inconsistent() {
        let g = glossary(&[("ml", "ML", "Machine Learning")]);
        let analysis = classify(&g, &[reference("ML", "ml", 3), typed("ML", 8)], 2);

        let finding = analysis.finding("ML").unwrap();
        assert_eq!(finding.classification, Classification::InconsistentTypedForm);
        assert_eq!(finding.count(), 1);
        assert_eq!(finding.occurrences[0].context.line(), 8);
    }

    #[test]
    fn test_below_threshold_is_not_reported() {
        let analysis = classify(&Glossary::default(), &[mention("CPU", 1)], 2);
        let finding = analysis.finding("CPU").unwrap();
        assert_eq!(finding.classification, Classification::Consistent);

        let occs: Vec<Occurrence> = (1..=3).map(|line| mention("CPU", line)).collect();
        let analysis = classify(&Glossary::default(), &occs, 4);
        assert_ne!(
            analysis.finding("CPU").unwrap().classification,
            Classification::UndefinedInformal
        );
    }

    #[test]
    fn test_at_threshold_is_undefined_informal() {
        let occs: Vec<Occurrence> = (1..=3).map(|line| mention("CPU", line)).collect();
        let analysis = classify(&Glossary::default(), &occs, 2);

        let finding = analysis.finding("CPU").unwrap();
        assert_eq!(finding.classification, Classification::UndefinedInformal);
        assert_eq!(finding.count(), 3);
        assert_eq!(
            finding.expansions.iter().collect::<Vec<_>>(),
            vec!["Central Processing Unit"]
        );
        assert_eq!(finding.long_form, None);
    }

    #[test]
    fn test_any_definition_suppresses_informal() {
        let g = glossary(&[("cpu", "CPU", "Central Processing Unit")]);
        let occs = vec![mention("CPU", 1), mention("CPU", 2), mention("CPU", 3)];
        let analysis = classify(&g, &occs, 2);

        assert_eq!(
            analysis.finding("CPU").unwrap().classification,
            Classification::Consistent
        );
    }

    #[test]
    fn test_every_acronym_has_exactly_one_finding() {
        let g = glossary(&[("ml", "ML", "Machine Learning")]);
        let occs = vec![
            mention("CPU", 1),
            reference("ML", "ml", 2),
            mention("CPU", 3),
            typed("ML", 4),
            reference("foo", "foo", 5),
        ];
        let analysis = classify(&g, &occs, 2);

        let acronyms: Vec<&str> = analysis.findings.iter().map(|f| f.acronym.as_str()).collect();
        assert_eq!(acronyms, vec!["CPU", "ML", "foo"]);
    }

    #[test]
    fn test_findings_ordered_by_classification_then_acronym() {
        let g = glossary(&[("ml", "ML", "Machine Learning"), ("ai", "AI", "Artificial Intelligence")]);
        let occs = vec![
            reference("AI", "ai", 1),
            typed("ML", 2),
            mention("GPU", 3),
            mention("GPU", 4),
            mention("CPU", 5),
            mention("CPU", 6),
        ];
        let analysis = classify(&g, &occs, 2);

        let order: Vec<(&str, Classification)> = analysis
            .findings
            .iter()
            .map(|f| (f.acronym.as_str(), f.classification))
            .collect();
        assert_eq!(
            order,
            vec![
                ("CPU", Classification::UndefinedInformal),
                ("GPU", Classification::UndefinedInformal),
                ("ML", Classification::InconsistentTypedForm),
                ("AI", Classification::Consistent),
            ]
        );
        assert_eq!(analysis.offending_count(), 3);
    }

    #[test]
    fn test_unused_entries() {
        let g = glossary(&[("ml", "ML", "Machine Learning"), ("ai", "AI", "Artificial Intelligence")]);
        let analysis = classify(&g, &[reference("ML", "ml", 1)], 2);

        let unused: Vec<&str> = analysis.unused_entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(unused, vec!["ai"]);
    }

    #[test]
    fn test_bare_short_form_counts_as_use() {
        let g = glossary(&[("ml", "ML", "Machine Learning")]);
        let bare = occurrence(
            "ML",
            OccurrenceKind::ShortForm {
                text: "ML".to_string(),
            },
            3,
        );
        let analysis = classify(&g, &[bare], 2);

        assert!(analysis.unused_entries.is_empty());
        assert_eq!(
            analysis.finding("ML").unwrap().classification,
            Classification::Consistent
        );
    }

    #[test]
    fn test_shared_short_form_merges_into_one_finding() {
        let g = glossary(&[
            ("ml", "ML", "Machine Learning"),
            ("ml-meta", "ML", "Meta Learning"),
        ]);
        let analysis = classify(
            &g,
            &[reference("ML", "ml", 1), reference("ML", "ml-meta", 2)],
            2,
        );

        assert_eq!(analysis.findings.len(), 1);
        let finding = analysis.finding("ML").unwrap();
        assert_eq!(finding.count(), 2);
        assert_eq!(finding.long_form.as_deref(), Some("Machine Learning"));
        assert!(analysis.unused_entries.is_empty());
    }

    #[test]
    fn test_zero_threshold_behaves_like_one() {
        let analysis = classify(&Glossary::default(), &[mention("CPU", 1)], 0);
        assert_eq!(
            analysis.finding("CPU").unwrap().classification,
            Classification::UndefinedInformal
        );
    }
}
