use anyhow::Result;
use tracing::info;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary},
};

use crate::{
    core::AnalysisContext,
    issues::Issue,
    render::{ReportInput, RunSummary, write_report},
    rules::check_all,
    utils::timestamp_now,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = AnalysisContext::new(args)?;

    let issues = check_all(&ctx);
    info!(
        files = ctx.documents.len(),
        issues = issues.len(),
        "analysis finished"
    );

    let report_path = if args.no_report {
        None
    } else {
        let notes: Vec<&Issue> = issues.iter().filter(|i| i.rule().is_note()).collect();
        let input = ReportInput {
            analysis: ctx.analysis(),
            summary: RunSummary {
                entry: ctx.entry.to_string_lossy().to_string(),
                files: ctx.documents.paths().into_iter().map(String::from).collect(),
                glossary_entries: ctx.glossary().len(),
                occurrences: ctx.occurrences().len(),
                threshold: ctx.config.informal_threshold,
                generated_at: timestamp_now(),
            },
            notes,
            max_locations: ctx.config.max_locations,
        };
        write_report(&ctx.output, &input)?;
        Some(ctx.output.clone())
    };

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            files_checked: ctx.documents.len(),
            report_path,
        }),
        issues,
        true,
    ))
}
