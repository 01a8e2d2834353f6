//! Usage scanning: parenthetical mentions, glossary references and typed-out
//! long forms.

use std::collections::HashSet;

use crate::core::{
    collect::{DocumentLine, DocumentSet},
    data::{Glossary, Occurrence, OccurrenceKind, SourceContext, SourceLocation},
    matchers::{
        LongFormMatcher, ShortFormMatcher, mask_spans, match_definitions, match_parentheticals,
        match_references, strip_comment,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Scan the preamble too (by default scanning starts at `\begin{document}`).
    pub include_preamble: bool,
    /// Parenthetical acronyms never reported (Roman numerals and the like).
    pub ignored_acronyms: HashSet<String>,
}

/// Glossary forms to look for in prose.
struct FormMatchers<'a> {
    long: Vec<(&'a str, LongFormMatcher)>,
    short: Vec<(&'a str, ShortFormMatcher)>,
}

/// Scan the document body for every kind of acronym usage.
///
/// Long and short forms are looked up in `glossary`, so this must run after
/// extraction. Occurrences come back in reading order, then column order
/// within a line.
pub fn scan_usages(
    documents: &DocumentSet,
    glossary: &Glossary,
    options: &ScanOptions,
) -> Vec<Occurrence> {
    let forms = FormMatchers {
        long: glossary
            .iter()
            .filter_map(|entry| {
                let matcher = LongFormMatcher::new(entry.long_form.as_deref()?)?;
                Some((entry.short.as_str(), matcher))
            })
            .collect(),
        short: glossary
            .iter()
            .filter_map(|entry| Some((entry.short.as_str(), ShortFormMatcher::new(&entry.short)?)))
            .collect(),
    };

    documents
        .body_lines(options.include_preamble)
        .into_iter()
        .flat_map(|line| scan_line(&line, glossary, &forms, options))
        .collect()
}

fn scan_line(
    line: &DocumentLine<'_>,
    glossary: &Glossary,
    forms: &FormMatchers<'_>,
    options: &ScanOptions,
) -> Vec<Occurrence> {
    let text = strip_comment(line.text);

    // Definitions are not prose; an unparseable one is masked to the line end.
    let definitions = match_definitions(text);
    let mut spans: Vec<_> = definitions
        .definitions
        .iter()
        .map(|d| d.span.clone())
        .collect();
    spans.extend(definitions.ambiguous.iter().map(|a| a.offset..text.len()));
    let masked = mask_spans(text, &spans);

    let context = |col: usize| {
        SourceContext::new(
            SourceLocation::new(&line.file.path, line.number, col),
            line.text,
        )
    };

    let mut found = Vec::new();
    // Text already claimed by a mention, reference or long form.
    let mut claimed = Vec::new();

    for mention in match_parentheticals(&masked) {
        claimed.push(mention.span.clone());
        if options.ignored_acronyms.contains(&mention.acronym) {
            continue;
        }
        found.push(Occurrence::new(
            mention.acronym,
            OccurrenceKind::ParentheticalMention {
                expansion: mention.expansion,
            },
            context(mention.col),
        ));
    }

    for reference in match_references(&masked) {
        claimed.push(reference.span.clone());
        let acronym = glossary
            .get(&reference.key)
            .map(|entry| entry.short.clone())
            .unwrap_or_else(|| reference.key.clone());
        found.push(Occurrence::new(
            acronym,
            OccurrenceKind::GlossaryReference {
                macro_name: reference.macro_name,
                key: reference.key,
            },
            context(reference.col),
        ));
    }

    for (short, matcher) in &forms.long {
        for typed in matcher.find_all(&masked) {
            claimed.push(typed.span.clone());
            found.push(Occurrence::new(
                *short,
                OccurrenceKind::TypedFullForm { text: typed.text },
                context(typed.col),
            ));
        }
    }

    let prose = mask_spans(&masked, &claimed);
    for (short, matcher) in &forms.short {
        for bare in matcher.find_all(&prose) {
            found.push(Occurrence::new(
                *short,
                OccurrenceKind::ShortForm { text: bare.text },
                context(bare.col),
            ));
        }
    }

    found.sort_by_key(|o| o.context.col());
    found
}
