use std::collections::{BTreeMap, HashMap};

use super::SourceLocation;

/// A formally defined acronym.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymEntry {
    /// Glossary label used by reference macros (`ml` in `\gls{ml}`).
    pub key: String,
    /// Short form as printed (`ML`).
    pub short: String,
    /// Registered long form. `None` when the definition left it empty.
    pub long_form: Option<String>,
    /// Definition whose short and long form are in effect.
    pub defined_at: SourceLocation,
    /// Every place the key was defined, in reading order.
    pub definitions: Vec<SourceLocation>,
}

impl AcronymEntry {
    pub fn new(
        key: impl Into<String>,
        short: impl Into<String>,
        long_form: Option<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            key: key.into(),
            short: short.into(),
            long_form,
            defined_at: location.clone(),
            definitions: vec![location],
        }
    }

    pub fn is_duplicated(&self) -> bool {
        self.definitions.len() > 1
    }
}

/// Acronym key → entry mapping built by the glossary extractor.
///
/// Entries are kept sorted by key so every consumer iterates deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    entries: BTreeMap<String, AcronymEntry>,
    /// short form → key
    shorts: HashMap<String, String>,
}

impl Glossary {
    pub fn new(entries: BTreeMap<String, AcronymEntry>) -> Self {
        let mut shorts = HashMap::new();
        // First key in sorted order wins when two labels share a short form.
        for (key, entry) in entries.iter().rev() {
            shorts.insert(entry.short.clone(), key.clone());
        }
        Self { entries, shorts }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = AcronymEntry>) -> Self {
        Self::new(
            entries
                .into_iter()
                .map(|entry| (entry.key.clone(), entry))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&AcronymEntry> {
        self.entries.get(key)
    }

    pub fn by_short(&self, short: &str) -> Option<&AcronymEntry> {
        self.shorts.get(short).and_then(|key| self.entries.get(key))
    }

    pub fn contains_short(&self, short: &str) -> bool {
        self.shorts.contains_key(short)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AcronymEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::data::acronym::*;

    fn entry(key: &str, short: &str, long: &str) -> AcronymEntry {
        AcronymEntry::new(
            key,
            short,
            Some(long.to_string()),
            SourceLocation::with_line("main.tex", 1),
        )
    }

    #[test]
    fn test_lookup_by_key_and_short() {
        let glossary = Glossary::from_entries([
            entry("ml", "ML", "Machine Learning"),
            entry("cpu", "CPU", "Central Processing Unit"),
        ]);

        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary.get("ml").unwrap().short, "ML");
        assert_eq!(glossary.by_short("CPU").unwrap().key, "cpu");
        assert!(glossary.contains_short("ML"));
        assert!(!glossary.contains_short("ml"));
        assert!(glossary.get("gpu").is_none());
    }

    #[test]
    fn test_iteration_is_sorted_by_key() {
        let glossary = Glossary::from_entries([
            entry("zfs", "ZFS", "Zettabyte File System"),
            entry("api", "API", "Application Programming Interface"),
        ]);
        let keys: Vec<&str> = glossary.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["api", "zfs"]);
    }

    #[test]
    fn test_shared_short_form_resolves_to_first_key() {
        let glossary = Glossary::from_entries([
            entry("pc-b", "PC", "Principal Component"),
            entry("pc-a", "PC", "Personal Computer"),
        ]);
        assert_eq!(glossary.by_short("PC").unwrap().key, "pc-a");
    }

    #[test]
    fn test_duplicated_flag() {
        let mut e = entry("ml", "ML", "Machine Learning");
        assert!(!e.is_duplicated());
        e.definitions.push(SourceLocation::with_line("appendix.tex", 4));
        assert!(e.is_duplicated());
        assert_eq!(e.defined_at.file_path, "main.tex");
    }
}
