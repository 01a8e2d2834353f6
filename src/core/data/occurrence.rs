use super::SourceContext;

/// How an acronym was observed in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccurrenceKind {
    /// `Central Processing Unit (CPU)`.
    /// `expansion` holds the capitalized phrase before the parenthesis, if any.
    ParentheticalMention { expansion: Option<String> },
    /// `\gls{cpu}`, `\acrlong{cpu}`, `\ac{CPU}`, ...
    GlossaryReference { macro_name: String, key: String },
    /// The registered long form typed out as plain text.
    TypedFullForm { text: String },
    /// The registered short form typed as plain text (`ML`, `MLs`).
    ShortForm { text: String },
}

impl OccurrenceKind {
    pub fn is_parenthetical(&self) -> bool {
        matches!(self, OccurrenceKind::ParentheticalMention { .. })
    }

    pub fn is_typed_full_form(&self) -> bool {
        matches!(self, OccurrenceKind::TypedFullForm { .. })
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, OccurrenceKind::GlossaryReference { .. })
    }
}

impl std::fmt::Display for OccurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccurrenceKind::ParentheticalMention { .. } => write!(f, "parenthetical mention"),
            OccurrenceKind::GlossaryReference { macro_name, .. } => {
                write!(f, "\\{} reference", macro_name)
            }
            OccurrenceKind::TypedFullForm { .. } => write!(f, "typed full form"),
            OccurrenceKind::ShortForm { .. } => write!(f, "short form"),
        }
    }
}

/// A single observed usage of an acronym.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Short form of the matching glossary entry, or the raw matched text
    /// (parenthetical acronym, unknown reference key) when there is none.
    pub acronym: String,
    pub kind: OccurrenceKind,
    pub context: SourceContext,
}

impl Occurrence {
    pub fn new(acronym: impl Into<String>, kind: OccurrenceKind, context: SourceContext) -> Self {
        Self {
            acronym: acronym.into(),
            kind,
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::data::occurrence::*;
    use crate::core::data::SourceLocation;

    #[test]
    fn test_kind_predicates() {
        let mention = OccurrenceKind::ParentheticalMention { expansion: None };
        let reference = OccurrenceKind::GlossaryReference {
            macro_name: "gls".to_string(),
            key: "cpu".to_string(),
        };
        let typed = OccurrenceKind::TypedFullForm {
            text: "central processing unit".to_string(),
        };

        assert!(mention.is_parenthetical());
        assert!(reference.is_reference());
        assert!(typed.is_typed_full_form());
        assert!(!typed.is_parenthetical());
    }

    #[test]
    fn test_kind_display() {
        let reference = OccurrenceKind::GlossaryReference {
            macro_name: "glspl".to_string(),
            key: "cpu".to_string(),
        };
        assert_eq!(reference.to_string(), "\\glspl reference");
        assert_eq!(
            OccurrenceKind::ParentheticalMention { expansion: None }.to_string(),
            "parenthetical mention"
        );
        assert_eq!(
            OccurrenceKind::ShortForm {
                text: "MLs".to_string()
            }
            .to_string(),
            "short form"
        );
    }

    #[test]
    fn test_new_occurrence() {
        let ctx = SourceContext::new(SourceLocation::new("main.tex", 4, 7), "the \\gls{cpu}");
        let occ = Occurrence::new(
            "CPU",
            OccurrenceKind::GlossaryReference {
                macro_name: "gls".to_string(),
                key: "cpu".to_string(),
            },
            ctx,
        );
        assert_eq!(occ.acronym, "CPU");
        assert_eq!(occ.context.line(), 4);
    }
}
