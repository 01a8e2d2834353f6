//! Common utility functions shared across the codebase.

/// Longest excerpt shown for a source line, in characters.
pub const MAX_EXCERPT_CHARS: usize = 160;

/// Escapes the five HTML special characters.
///
/// # Examples
///
/// ```
/// use acrolint::utils::escape_html;
///
/// assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_html("\\gls{ml}"), "\\gls{ml}");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `text` in a Markdown code span, widening the fence when the text
/// itself contains backticks.
pub fn markdown_code(text: &str) -> String {
    if text.contains('`') {
        format!("`` {} ``", text)
    } else {
        format!("`{}`", text)
    }
}

/// Escapes characters that would break a Markdown table cell or inline text.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '|' | '*' | '_' | '[' | ']' | '<' | '>' | '`' | '#') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A source line excerpt split around the highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub before: String,
    pub hit: String,
    pub after: String,
}

impl std::fmt::Display for Excerpt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.before, self.hit, self.after)
    }
}

/// Trimmed excerpt of `line` with `len` characters from the 1-based column
/// `col` as the hit. Lines longer than `MAX_EXCERPT_CHARS` are windowed
/// around the hit and cut ends are marked with `...`.
pub fn excerpt(line: &str, col: usize, len: usize) -> Excerpt {
    let chars: Vec<char> = line.chars().collect();
    let hit_start = col.saturating_sub(1).min(chars.len());

    let (start, end) = if chars.len() <= MAX_EXCERPT_CHARS {
        (0, chars.len())
    } else {
        let start = hit_start
            .saturating_sub(MAX_EXCERPT_CHARS / 3)
            .min(chars.len() - MAX_EXCERPT_CHARS);
        (start, start + MAX_EXCERPT_CHARS)
    };
    let hit_start = hit_start.clamp(start, end);
    let hit_end = (hit_start + len).min(end);

    let collect = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
    Excerpt {
        before: format!(
            "{}{}",
            if start > 0 { "..." } else { "" },
            collect(start..hit_start).trim_start()
        ),
        hit: collect(hit_start..hit_end),
        after: format!(
            "{}{}",
            collect(hit_end..end).trim_end(),
            if end < chars.len() { "..." } else { "" }
        ),
    }
}

/// Local time formatted for report headers.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
