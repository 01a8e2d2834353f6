//! Named pattern matchers for LaTeX acronym constructs.
//!
//! Every matcher works on a single line and returns typed matches with
//! 1-based, character-based columns. Callers strip comments and mask
//! definition spans before scanning for usages.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Words allowed inside a capitalized expansion ("Bureau *of* Standards").
const CONNECTOR_WORDS: &[&str] = &[
    "of", "and", "for", "the", "&", "to", "in", "on", "with", "at", "by", "from", "de",
];

/// Maximum number of words looked at in front of a parenthetical mention.
const MAX_EXPANSION_WORDS: usize = 5;

// \input{chapters/intro}, \include{appendix.tex}, \subfile{sections/a},
// \loadglsentries[acronym]{glossary}
static INCLUDE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(input|include|subfile|loadglsentries)\s*(?:\[[^\]]*\])?\s*\{([^{}]+)\}")
        .unwrap()
});

// \newacronym[options]{key}{SHORT}{Long Form}
static GLOSSARIES_DEFINITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\(newacronym|newabbreviation)\*?(?:\[[^\]]*\])?\s*\{([^{}]*)\}\s*\{([^{}]*)\}\s*\{([^{}]*)\}",
    )
    .unwrap()
});

// \acrodef{SHORT}[display]{Long Form}, \acro{SHORT}{Long Form}
static ACRONYM_PACKAGE_DEFINITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(acrodef|newacro|acro)\*?\s*\{([^{}]*)\}(?:\s*\[[^\]]*\])?\s*\{([^{}]*)\}")
        .unwrap()
});

// Any definition macro token, complete or not.
static DEFINITION_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(newacronym|newabbreviation|acrodef|newacro|acro)\b").unwrap()
});

// Central Processing Unit (CPU), Graphics Processing Units (GPUs)
static PARENTHETICAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Z][A-Z0-9]{1,9})s?\)").unwrap());

static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\\(gls|glspl|Gls|Glspl|GLS|GLSpl|glstext|glsfirst|glsadd",
        r"|glsxtrshort|glsxtrlong|glsxtrfull",
        r"|acrshort|acrshortpl|Acrshort|acrlong|acrlongpl|Acrlong|acrfull|acrfullpl|Acrfull",
        r"|ac|acp|Ac|Acp|acs|acsp|acl|aclp|Acl|acf|acfp|Acf)",
        r"\*?(?:\[[^\]]*\])?\{([^{}]+)\}"
    ))
    .unwrap()
});

static BEGIN_DOCUMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\begin\s*\{document\}").unwrap());

// ============================================================
// Match types
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeMatch {
    pub macro_name: String,
    pub target: String,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionMatch {
    pub macro_name: String,
    pub key: String,
    pub short: String,
    /// `None` when the long-form argument is empty.
    pub long_form: Option<String>,
    pub col: usize,
    /// Byte span of the whole macro in the scanned line.
    pub span: Range<usize>,
}

/// A definition macro whose arguments could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousDefinition {
    pub macro_name: String,
    pub col: usize,
    /// Byte offset of the macro in the scanned line.
    pub offset: usize,
    pub reason: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DefinitionScan {
    pub definitions: Vec<DefinitionMatch>,
    pub ambiguous: Vec<AmbiguousDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentheticalMatch {
    pub acronym: String,
    pub expansion: Option<String>,
    pub col: usize,
    /// Byte span of `(ACR)` in the scanned line.
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    pub macro_name: String,
    pub key: String,
    pub col: usize,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongFormMatch {
    pub text: String,
    pub col: usize,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortFormMatch {
    pub text: String,
    pub col: usize,
}

// ============================================================
// Matchers
// ============================================================

/// Returns the part of `line` before an unescaped `%`.
pub fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (idx, &b) in bytes.iter().enumerate() {
        if b != b'%' {
            continue;
        }
        let backslashes = bytes[..idx]
            .iter()
            .rev()
            .take_while(|&&c| c == b'\\')
            .count();
        if backslashes % 2 == 0 {
            return &line[..idx];
        }
    }
    line
}

pub fn is_begin_document(line: &str) -> bool {
    BEGIN_DOCUMENT_REGEX.is_match(line)
}

pub fn match_includes(line: &str) -> Vec<IncludeMatch> {
    INCLUDE_REGEX
        .captures_iter(line)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            Some(IncludeMatch {
                macro_name: cap[1].to_string(),
                target: cap[2].trim().to_string(),
                col: column_at(line, whole.start()),
            })
        })
        .collect()
}

/// Finds glossary definitions on a line, plus definition macros that are
/// present but cannot be parsed on this line alone.
pub fn match_definitions(line: &str) -> DefinitionScan {
    let mut scan = DefinitionScan::default();
    let mut parsed_starts = Vec::new();

    for cap in GLOSSARIES_DEFINITION_REGEX.captures_iter(line) {
        let Some(whole) = cap.get(0) else { continue };
        parsed_starts.push(whole.start());
        push_definition(
            &mut scan,
            line,
            whole.range(),
            &cap[1],
            cap[2].trim(),
            cap[3].trim(),
            &cap[4],
        );
    }

    for cap in ACRONYM_PACKAGE_DEFINITION_REGEX.captures_iter(line) {
        let Some(whole) = cap.get(0) else { continue };
        parsed_starts.push(whole.start());
        let short = cap[2].trim();
        push_definition(&mut scan, line, whole.range(), &cap[1], short, short, &cap[3]);
    }

    for token in DEFINITION_TOKEN_REGEX.find_iter(line) {
        if parsed_starts.contains(&token.start()) {
            continue;
        }
        scan.ambiguous.push(AmbiguousDefinition {
            macro_name: token.as_str().trim_start_matches('\\').to_string(),
            col: column_at(line, token.start()),
            offset: token.start(),
            reason: "argument list is incomplete on this line or contains nested braces"
                .to_string(),
        });
    }

    scan.definitions.sort_by_key(|d| d.span.start);
    scan.ambiguous.sort_by_key(|a| a.col);
    scan
}

fn push_definition(
    scan: &mut DefinitionScan,
    line: &str,
    span: Range<usize>,
    macro_name: &str,
    key: &str,
    short: &str,
    long: &str,
) {
    let col = column_at(line, span.start);
    if key.is_empty() || short.is_empty() {
        scan.ambiguous.push(AmbiguousDefinition {
            macro_name: macro_name.to_string(),
            col,
            offset: span.start,
            reason: "empty key or short form".to_string(),
        });
        return;
    }

    let long_form = normalize_whitespace(long);
    scan.definitions.push(DefinitionMatch {
        macro_name: macro_name.to_string(),
        key: key.to_string(),
        short: short.to_string(),
        long_form: (!long_form.is_empty()).then_some(long_form),
        col,
        span,
    });
}

/// Finds `Words (ABC)` mentions and recovers the capitalized phrase in front.
pub fn match_parentheticals(line: &str) -> Vec<ParentheticalMatch> {
    PARENTHETICAL_REGEX
        .captures_iter(line)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            Some(ParentheticalMatch {
                acronym: cap[1].to_string(),
                expansion: expansion_before(&line[..whole.start()]),
                col: column_at(line, whole.start()),
                span: whole.range(),
            })
        })
        .collect()
}

fn expansion_before(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let candidates = &words[words.len().saturating_sub(MAX_EXPANSION_WORDS)..];

    let mut picked: Vec<&str> = Vec::new();
    for word in candidates.iter().rev() {
        if is_capitalized_word(word) || is_connector(word) {
            picked.push(word);
        } else {
            break;
        }
    }
    picked.reverse();

    // A phrase never starts or ends with a connector.
    while picked.first().is_some_and(|w| is_connector(w)) {
        picked.remove(0);
    }
    while picked.last().is_some_and(|w| is_connector(w)) {
        picked.pop();
    }

    if picked.is_empty() {
        None
    } else {
        Some(picked.join(" "))
    }
}

fn is_capitalized_word(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
        && word.chars().all(|c| c.is_alphanumeric() || c == '-')
}

fn is_connector(word: &str) -> bool {
    CONNECTOR_WORDS.contains(&word.to_lowercase().as_str())
}

pub fn match_references(line: &str) -> Vec<ReferenceMatch> {
    REFERENCE_REGEX
        .captures_iter(line)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            Some(ReferenceMatch {
                macro_name: cap[1].to_string(),
                key: cap[2].trim().to_string(),
                col: column_at(line, whole.start()),
                span: whole.range(),
            })
        })
        .collect()
}

/// Case-insensitive matcher for one registered long form.
#[derive(Debug, Clone)]
pub struct LongFormMatcher {
    regex: Regex,
}

impl LongFormMatcher {
    /// Returns `None` for long forms without any word.
    pub fn new(long_form: &str) -> Option<Self> {
        let words: Vec<String> = long_form
            .split(|c: char| c.is_whitespace() || c == '~')
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect();
        let first = long_form.trim().chars().next()?;
        let last = long_form.trim().chars().last()?;

        let mut pattern = String::from("(?i)");
        if is_word_char(first) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&words.join(r"[\s~]+"));
        if is_word_char(last) {
            pattern.push_str(r"(?:s|es)?\b");
        }

        Regex::new(&pattern).ok().map(|regex| Self { regex })
    }

    pub fn find_all(&self, line: &str) -> Vec<LongFormMatch> {
        self.regex
            .find_iter(line)
            .map(|m| LongFormMatch {
                text: m.as_str().to_string(),
                col: column_at(line, m.start()),
                span: m.range(),
            })
            .collect()
    }
}

/// Matcher for a glossary short form typed as plain text (`ML`, `MLs`).
///
/// Case-sensitive: short forms like `IT` or `US` would otherwise match
/// ordinary words. Macro names (`\ML`) are not matches.
#[derive(Debug, Clone)]
pub struct ShortFormMatcher {
    regex: Regex,
}

impl ShortFormMatcher {
    /// Returns `None` for an empty short form.
    pub fn new(short: &str) -> Option<Self> {
        let short = short.trim();
        let first = short.chars().next()?;
        let last = short.chars().last()?;

        let mut pattern = String::new();
        if is_word_char(first) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(short));
        if is_word_char(last) {
            pattern.push_str(r"s?\b");
        }

        Regex::new(&pattern).ok().map(|regex| Self { regex })
    }

    pub fn find_all(&self, line: &str) -> Vec<ShortFormMatch> {
        self.regex
            .find_iter(line)
            .filter(|m| !line[..m.start()].ends_with('\\'))
            .map(|m| ShortFormMatch {
                text: m.as_str().to_string(),
                col: column_at(line, m.start()),
            })
            .collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replaces the given byte spans with spaces, one space per character, so
/// character columns stay stable.
pub fn mask_spans(line: &str, spans: &[Range<usize>]) -> String {
    let mut masked = String::with_capacity(line.len());
    for (idx, c) in line.char_indices() {
        if spans.iter().any(|span| span.contains(&idx)) {
            masked.push(' ');
        } else {
            masked.push(c);
        }
    }
    masked
}

/// 1-based character column of a byte offset.
pub fn column_at(line: &str, byte_idx: usize) -> usize {
    line[..byte_idx].chars().count() + 1
}

fn normalize_whitespace(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '~')
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
