//! Glossary extraction: builds the acronym map from formal definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    collect::DocumentSet,
    data::{AcronymEntry, Glossary, SourceLocation},
    error::AnalysisError,
    matchers::{match_definitions, strip_comment},
};

/// Which definition is kept when a key is defined more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    #[default]
    LastWins,
    FirstWins,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicatePolicy::LastWins => write!(f, "last-wins"),
            DuplicatePolicy::FirstWins => write!(f, "first-wins"),
        }
    }
}

/// A key defined again after its first definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDefinition {
    pub key: String,
    pub short: String,
    /// Where the redefinition happens.
    pub location: SourceLocation,
    /// The definition that was in effect before.
    pub previous: SourceLocation,
    pub policy: DuplicatePolicy,
}

#[derive(Debug, Default)]
pub struct GlossaryExtraction {
    pub glossary: Glossary,
    pub duplicates: Vec<DuplicateDefinition>,
    /// `ParseAmbiguity` errors for definitions that were skipped.
    pub ambiguities: Vec<AnalysisError>,
}

/// Extract every formal acronym definition, preamble included.
pub fn extract_glossary(documents: &DocumentSet, policy: DuplicatePolicy) -> GlossaryExtraction {
    let mut entries: BTreeMap<String, AcronymEntry> = BTreeMap::new();
    let mut duplicates = Vec::new();
    let mut ambiguities = Vec::new();

    for line in documents.lines() {
        let scan = match_definitions(strip_comment(line.text));

        for def in scan.definitions {
            let location = SourceLocation::new(&line.file.path, line.number, def.col);

            let Some(existing) = entries.get_mut(&def.key) else {
                entries.insert(
                    def.key.clone(),
                    AcronymEntry::new(def.key, def.short, def.long_form, location),
                );
                continue;
            };

            warn!(
                key = %def.key,
                at = %location,
                previous = %existing.defined_at,
                "duplicate acronym definition ({})",
                policy
            );
            duplicates.push(DuplicateDefinition {
                key: def.key.clone(),
                short: def.short.clone(),
                location: location.clone(),
                previous: existing.defined_at.clone(),
                policy,
            });
            existing.definitions.push(location.clone());
            if policy == DuplicatePolicy::LastWins {
                existing.short = def.short;
                existing.long_form = def.long_form;
                existing.defined_at = location;
            }
        }

        for ambiguous in scan.ambiguous {
            let err = AnalysisError::ParseAmbiguity {
                location: SourceLocation::new(&line.file.path, line.number, ambiguous.col),
                macro_name: ambiguous.macro_name,
                reason: ambiguous.reason,
            };
            warn!("{}, definition skipped", err);
            ambiguities.push(err);
        }
    }

    GlossaryExtraction {
        glossary: Glossary::new(entries),
        duplicates,
        ambiguities,
    }
}
