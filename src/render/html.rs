use super::{REPORT_TITLE, ReportInput, note_parts, occurrence_excerpt, occurrence_label, sample};
use crate::{
    core::{Classification, Finding},
    utils::{Excerpt, escape_html},
};

const STYLE: &str = r#"
body { font-family: Helvetica, Arial, sans-serif; margin: 2.5em auto; max-width: 60em; color: #222; }
h1 { font-size: 1.8em; margin-bottom: 0.2em; }
h2 { font-size: 1.35em; border-bottom: 1px solid #999; padding-bottom: 0.2em; margin-top: 1.8em; }
h3 { font-size: 1.1em; margin-bottom: 0.3em; }
.meta, .description, .empty { color: #555; font-style: italic; }
table { border-collapse: collapse; margin: 0.8em 0; }
th, td { border: 1px solid #333; padding: 0.35em 0.8em; text-align: left; }
th { background: #555; color: #fff; }
table.summary td { background: #f5f5dc; }
td.count { text-align: right; }
ul.locations { list-style: none; padding-left: 1.2em; }
ul.locations li { margin: 0.25em 0; }
.loc { color: #1a4fa0; font-weight: bold; font-family: monospace; }
.kind { color: #777; }
.excerpt { font-family: monospace; background: #f4f4f4; padding: 0 0.3em; }
.excerpt mark { background: #ffe08a; color: inherit; }
code { background: #eef; padding: 0 0.3em; }
.finding { page-break-inside: avoid; margin-bottom: 1em; }
@page { size: A4; margin: 2cm; }
@media print {
  body { margin: 0; max-width: none; }
  section { page-break-before: always; }
  section:first-of-type { page-break-before: auto; }
}
"#;

pub(super) fn render(input: &ReportInput<'_>) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<h1>{title}</h1>\n<p class=\"meta\">Generated on: {ts}</p>\n",
        title = REPORT_TITLE,
        ts = escape_html(&input.summary.generated_at),
    ));
    body.push_str(&render_summary(input));

    for (idx, classification) in Classification::all().into_iter().enumerate() {
        body.push_str(&render_classification(input, idx + 1, classification));
    }

    body.push_str(&render_unused(input));
    body.push_str(&render_notes(input));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = REPORT_TITLE,
        style = STYLE,
        body = body,
    )
}

fn render_summary(input: &ReportInput<'_>) -> String {
    let mut rows = String::new();
    for (label, count) in input.summary_rows() {
        rows.push_str(&format!(
            "<tr><td>{label}</td><td class=\"count\">{count}</td></tr>\n"
        ));
    }
    format!(
        "<h2>Summary</h2>\n<p>Entry file <code>{entry}</code>, informal threshold {threshold}.</p>\n<table class=\"summary\">\n<tr><th>Category</th><th>Count</th></tr>\n{rows}</table>\n",
        entry = escape_html(&input.summary.entry),
        threshold = input.summary.threshold,
        rows = rows,
    )
}

fn render_classification(
    input: &ReportInput<'_>,
    number: usize,
    classification: Classification,
) -> String {
    let findings: Vec<&Finding> = input.analysis.with_classification(classification).collect();

    let content = if findings.is_empty() {
        "<p class=\"empty\">None found.</p>\n".to_string()
    } else if classification == Classification::Consistent {
        render_consistent_table(&findings)
    } else {
        findings
            .iter()
            .map(|f| render_finding(f, input.max_locations))
            .collect()
    };

    format!(
        "<section>\n<h2>{number}. {title}</h2>\n<p class=\"description\">{description}</p>\n{content}</section>\n",
        number = number,
        title = classification.title(),
        description = escape_html(classification.description()),
        content = content,
    )
}

fn render_finding(finding: &Finding, max_locations: usize) -> String {
    let mut out = String::from("<div class=\"finding\">\n");

    let heading = match &finding.long_form {
        Some(long) => format!("{} ({})", escape_html(&finding.acronym), escape_html(long)),
        None => escape_html(&finding.acronym),
    };
    out.push_str(&format!(
        "<h3>{heading}</h3>\n<p>{count} occurrence{s}</p>\n",
        heading = heading,
        count = finding.count(),
        s = if finding.count() == 1 { "" } else { "s" },
    ));

    if finding.classification == Classification::UndefinedInformal {
        if !finding.expansions.is_empty() {
            let expansions: Vec<String> = finding.expansions.iter().map(|e| escape_html(e)).collect();
            out.push_str(&format!(
                "<p>Informal expansions: {}</p>\n",
                expansions.join(", ")
            ));
        }
        out.push_str(&format!(
            "<p>Suggested definition: <code>{}</code></p>\n",
            escape_html(&finding.suggested_definition())
        ));
    }

    let (shown, more) = sample(finding, max_locations);
    out.push_str("<ul class=\"locations\">\n");
    for occurrence in shown {
        out.push_str(&format!(
            "<li><span class=\"loc\">{loc}</span> <span class=\"kind\">{kind}</span><br><span class=\"excerpt\">{excerpt}</span></li>\n",
            loc = escape_html(&occurrence.context.location.to_string()),
            kind = escape_html(&occurrence_label(occurrence)),
            excerpt = render_excerpt(&occurrence_excerpt(occurrence)),
        ));
    }
    if more > 0 {
        out.push_str(&format!("<li class=\"more\">and {more} more</li>\n"));
    }
    out.push_str("</ul>\n</div>\n");

    out
}

fn render_excerpt(excerpt: &Excerpt) -> String {
    if excerpt.hit.is_empty() {
        return escape_html(&excerpt.to_string());
    }
    format!(
        "{}<mark>{}</mark>{}",
        escape_html(&excerpt.before),
        escape_html(&excerpt.hit),
        escape_html(&excerpt.after)
    )
}

fn render_consistent_table(findings: &[&Finding]) -> String {
    let mut rows = String::new();
    for finding in findings {
        rows.push_str(&format!(
            "<tr><td>{acronym}</td><td>{long}</td><td class=\"count\">{count}</td></tr>\n",
            acronym = escape_html(&finding.acronym),
            long = escape_html(finding.long_form.as_deref().unwrap_or("")),
            count = finding.count(),
        ));
    }
    format!(
        "<table>\n<tr><th>Acronym</th><th>Long form</th><th>Occurrences</th></tr>\n{rows}</table>\n"
    )
}

fn render_unused(input: &ReportInput<'_>) -> String {
    let entries = &input.analysis.unused_entries;
    let content = if entries.is_empty() {
        "<p class=\"empty\">None found.</p>\n".to_string()
    } else {
        let items: String = entries
            .iter()
            .map(|entry| {
                format!(
                    "<li><b>{short}</b>{long} <span class=\"loc\">{loc}</span></li>\n",
                    short = escape_html(&entry.short),
                    long = entry
                        .long_form
                        .as_deref()
                        .map(|l| format!(" ({})", escape_html(l)))
                        .unwrap_or_default(),
                    loc = escape_html(&entry.defined_at.to_string()),
                )
            })
            .collect();
        format!("<ul>\n{items}</ul>\n")
    };
    format!("<section>\n<h2>Defined but never used</h2>\n{content}</section>\n")
}

fn render_notes(input: &ReportInput<'_>) -> String {
    let content = if input.notes.is_empty() {
        "<p class=\"empty\">No notes.</p>\n".to_string()
    } else {
        let items: String = input
            .notes
            .iter()
            .map(|issue| {
                let (location, message) = note_parts(issue);
                format!(
                    "<li><span class=\"kind\">[{rule}]</span> <span class=\"loc\">{loc}</span> {msg}</li>\n",
                    rule = issue.rule(),
                    loc = escape_html(&location),
                    msg = escape_html(&message),
                )
            })
            .collect();
        format!("<ul>\n{items}</ul>\n")
    };
    format!("<section>\n<h2>Notes</h2>\n{content}</section>\n")
}

#[cfg(test)]
mod tests {
    use crate::issues::{Issue, UnreachableFileIssue};
    use crate::render::html::*;
    use crate::render::tests::{sample_analysis, sample_input};

    #[test]
    fn test_html_sections_in_order() {
        let analysis = sample_analysis();
        let html = render(&sample_input(&analysis, Vec::new()));

        let positions: Vec<usize> = [
            "<h1>LaTeX Acronym Analysis Report</h1>",
            "Generated on: 2026-10-15 09:30:00",
            "<h2>Summary</h2>",
            "<h2>1. Not in glossary, used informally</h2>",
            "<h2>2. In glossary, but full form typed out</h2>",
            "<h2>3. Used consistently</h2>",
            "<h2>Defined but never used</h2>",
            "<h2>Notes</h2>",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_html_undefined_informal_details() {
        let analysis = sample_analysis();
        let html = render(&sample_input(&analysis, Vec::new()));

        assert!(html.contains("<h3>CPU</h3>\n<p>7 occurrences</p>"));
        assert!(html.contains("Informal expansions: Central Processing Unit"));
        assert!(html.contains("<code>\\newacronym{cpu}{CPU}{Central Processing Unit}</code>"));
        assert_eq!(html.matches("<span class=\"loc\">chapters/intro.tex:").count(), 5);
        assert!(html.contains("<li class=\"more\">and 2 more</li>"));
    }

    #[test]
    fn test_html_escapes_source_text() {
        let analysis = sample_analysis();
        let html = render(&sample_input(&analysis, Vec::new()));

        assert!(html.contains("A <mark>Central Processing Unit (CPU)</mark> &lt;fast&gt; &amp; cheap."));
        assert!(!html.contains("<fast>"));
    }

    #[test]
    fn test_html_excerpt_marks_offending_text() {
        let analysis = sample_analysis();
        let html = render(&sample_input(&analysis, Vec::new()));

        assert!(html.contains(
            "<span class=\"excerpt\">Modern <mark>machine learning</mark> | rocks</span>"
        ));
    }

    #[test]
    fn test_html_excerpt_without_hit_has_no_mark() {
        let excerpt = Excerpt {
            before: "a < b".to_string(),
            hit: String::new(),
            after: String::new(),
        };
        assert_eq!(render_excerpt(&excerpt), "a &lt; b");
    }

    #[test]
    fn test_html_typed_and_unused() {
        let analysis = sample_analysis();
        let html = render(&sample_input(&analysis, Vec::new()));

        assert!(html.contains("<h3>ML (Machine Learning)</h3>\n<p>1 occurrence</p>"));
        assert!(html.contains("typed &quot;machine learning&quot;"));
        assert!(html.contains("<li><b>AI</b> (Artificial Intelligence) <span class=\"loc\">main.tex:2:1</span></li>"));
    }

    #[test]
    fn test_html_notes() {
        let analysis = sample_analysis();
        let note = Issue::UnreachableFile(UnreachableFileIssue {
            file_path: "drafts/old.tex".to_string(),
        });
        let html = render(&sample_input(&analysis, vec![&note]));

        assert!(html.contains(
            "[unreachable-file]</span> <span class=\"loc\">drafts/old.tex</span> not included from the entry file"
        ));
    }

    #[test]
    fn test_html_empty_sections() {
        let analysis = crate::core::Analysis::default();
        let html = render(&sample_input(&analysis, Vec::new()));
        assert_eq!(html.matches("None found.").count(), 4);
        assert!(html.contains("No notes."));
    }
}
