use super::{REPORT_TITLE, ReportInput, note_parts, occurrence_excerpt, occurrence_label, sample};
use crate::{
    core::{Classification, Finding},
    utils::{Excerpt, escape_markdown, markdown_code},
};

pub(super) fn render(input: &ReportInput<'_>) -> String {
    let mut out = format!(
        "# {REPORT_TITLE}\n\nGenerated on: {}\n\n",
        input.summary.generated_at
    );

    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "Entry file {}, informal threshold {}.\n\n",
        markdown_code(&input.summary.entry),
        input.summary.threshold
    ));
    out.push_str("| Category | Count |\n|---|---:|\n");
    for (label, count) in input.summary_rows() {
        out.push_str(&format!("| {label} | {count} |\n"));
    }
    out.push('\n');

    for (idx, classification) in Classification::all().into_iter().enumerate() {
        out.push_str(&format!(
            "## {}. {}\n\n_{}_\n\n",
            idx + 1,
            classification.title(),
            escape_markdown(classification.description())
        ));

        let findings: Vec<&Finding> = input.analysis.with_classification(classification).collect();
        if findings.is_empty() {
            out.push_str("None found.\n\n");
        } else if classification == Classification::Consistent {
            out.push_str("| Acronym | Long form | Occurrences |\n|---|---|---:|\n");
            for finding in findings {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    escape_markdown(&finding.acronym),
                    escape_markdown(finding.long_form.as_deref().unwrap_or("")),
                    finding.count()
                ));
            }
            out.push('\n');
        } else {
            for finding in findings {
                out.push_str(&render_finding(finding, input.max_locations));
            }
        }
    }

    out.push_str("## Defined but never used\n\n");
    if input.analysis.unused_entries.is_empty() {
        out.push_str("None found.\n\n");
    } else {
        for entry in &input.analysis.unused_entries {
            let long = entry
                .long_form
                .as_deref()
                .map(|l| format!(" ({})", escape_markdown(l)))
                .unwrap_or_default();
            out.push_str(&format!(
                "- **{}**{} at {}\n",
                escape_markdown(&entry.short),
                long,
                markdown_code(&entry.defined_at.to_string())
            ));
        }
        out.push('\n');
    }

    out.push_str("## Notes\n\n");
    if input.notes.is_empty() {
        out.push_str("No notes.\n");
    } else {
        for issue in &input.notes {
            let (location, message) = note_parts(issue);
            out.push_str(&format!(
                "- [{}] {} {}\n",
                issue.rule(),
                markdown_code(&location),
                escape_markdown(&message)
            ));
        }
    }

    out
}

fn render_finding(finding: &Finding, max_locations: usize) -> String {
    let heading = match &finding.long_form {
        Some(long) => format!(
            "{} ({})",
            escape_markdown(&finding.acronym),
            escape_markdown(long)
        ),
        None => escape_markdown(&finding.acronym),
    };
    let mut out = format!(
        "### {}\n\n{} occurrence{}\n\n",
        heading,
        finding.count(),
        if finding.count() == 1 { "" } else { "s" }
    );

    if finding.classification == Classification::UndefinedInformal {
        if !finding.expansions.is_empty() {
            let expansions: Vec<String> =
                finding.expansions.iter().map(|e| escape_markdown(e)).collect();
            out.push_str(&format!("Informal expansions: {}\n\n", expansions.join(", ")));
        }
        out.push_str(&format!(
            "Suggested definition: {}\n\n",
            markdown_code(&finding.suggested_definition())
        ));
    }

    let (shown, more) = sample(finding, max_locations);
    for occurrence in shown {
        out.push_str(&format!(
            "- {} {}: {}\n",
            markdown_code(&occurrence.context.location.to_string()),
            escape_markdown(&occurrence_label(occurrence)),
            render_excerpt(&occurrence_excerpt(occurrence))
        ));
    }
    if more > 0 {
        out.push_str(&format!("- and {more} more\n"));
    }
    out.push('\n');

    out
}

/// Escaped excerpt with the hit in bold.
fn render_excerpt(excerpt: &Excerpt) -> String {
    if excerpt.hit.is_empty() {
        return escape_markdown(&excerpt.to_string());
    }
    format!(
        "{}**{}**{}",
        escape_markdown(&excerpt.before),
        escape_markdown(&excerpt.hit),
        escape_markdown(&excerpt.after)
    )
}
