use anyhow::Result;

use super::super::args::GenerateCommand;
use super::helper::{RunContext, selected_categories};
use super::{CommandResult, CommandSummary, GenerateSummary, TargetReport};
use crate::core::{Mode, Target, generate_all};
use crate::host::refresher_for;

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let mode = if cmd.check { Mode::Check } else { Mode::Write };
    let refresher = refresher_for(&ctx.config.refresh_command);

    let categories = selected_categories(&cmd.categories);
    let targets: Vec<_> = categories
        .iter()
        .map(|&category| Target {
            collector: category.collector(&ctx.project_root),
            destination: ctx.config.destination(&ctx.project_root, category),
        })
        .collect();

    let results = generate_all(&targets, ctx.config.namespace(), refresher.as_ref(), mode);

    let reports: Vec<TargetReport> = categories
        .into_iter()
        .zip(targets)
        .zip(results)
        .map(|((category, target), result)| TargetReport {
            category,
            path: target.destination,
            result,
        })
        .collect();
    let error_count = reports.iter().filter(|r| r.is_error()).count();

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            mode,
            project_root: ctx.project_root,
            targets: reports,
        }),
        error_count,
    })
}
