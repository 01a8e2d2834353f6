use std::collections::BTreeSet;

use super::{AcronymEntry, Occurrence};

/// Classification of a single acronym.
///
/// Variant order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    /// Mentioned in parentheses at least `threshold` times, never defined.
    UndefinedInformal,
    /// Defined, but the long form is still typed out somewhere.
    InconsistentTypedForm,
    /// Nothing to report.
    Consistent,
}

impl Classification {
    pub fn all() -> [Classification; 3] {
        [
            Classification::UndefinedInformal,
            Classification::InconsistentTypedForm,
            Classification::Consistent,
        ]
    }

    pub fn is_offending(&self) -> bool {
        !matches!(self, Classification::Consistent)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Classification::UndefinedInformal => "Not in glossary, used informally",
            Classification::InconsistentTypedForm => "In glossary, but full form typed out",
            Classification::Consistent => "Used consistently",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Classification::UndefinedInformal => {
                "These acronyms appear in parentheses repeatedly but are not formally defined in a glossary."
            }
            Classification::InconsistentTypedForm => {
                "These acronyms are defined in a glossary, but their long form is also typed out instead of using \\gls or \\glspl."
            }
            Classification::Consistent => {
                "These acronyms are either referenced through the glossary or mentioned too rarely to matter."
            }
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::UndefinedInformal => write!(f, "undefined-informal"),
            Classification::InconsistentTypedForm => write!(f, "inconsistent-typed-form"),
            Classification::Consistent => write!(f, "consistent"),
        }
    }
}

/// Classification result for one acronym.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub acronym: String,
    pub classification: Classification,
    /// Occurrences backing the classification, in reading order.
    pub occurrences: Vec<Occurrence>,
    /// Registered long form, when the acronym has a glossary entry.
    pub long_form: Option<String>,
    /// Phrases seen in front of parenthetical mentions.
    pub expansions: BTreeSet<String>,
}

impl Finding {
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    /// `\newacronym` line that would define this acronym.
    ///
    /// Uses the registered long form, else the first informal expansion,
    /// else a placeholder.
    pub fn suggested_definition(&self) -> String {
        let long = self
            .long_form
            .as_deref()
            .or_else(|| self.expansions.iter().next().map(String::as_str))
            .unwrap_or("...");
        format!(
            "\\newacronym{{{}}}{{{}}}{{{}}}",
            self.acronym.to_lowercase(),
            self.acronym,
            long
        )
    }
}

/// Output of the consistency analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Ordered by classification, then acronym.
    pub findings: Vec<Finding>,
    /// Glossary entries with no occurrence of any kind.
    pub unused_entries: Vec<AcronymEntry>,
}

impl Analysis {
    pub fn with_classification(
        &self,
        classification: Classification,
    ) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |f| f.classification == classification)
    }

    pub fn finding(&self, acronym: &str) -> Option<&Finding> {
        self.findings.iter().find(|f| f.acronym == acronym)
    }

    pub fn offending_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.classification.is_offending())
            .count()
    }
}
