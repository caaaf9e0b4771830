use anyhow::Result;

use super::super::args::ListCommand;
use super::helper::{RunContext, selected_categories};
use super::{CategoryListing, CommandResult, CommandSummary, ListSummary};
use crate::core::{ConstantEntry, GenerateResult, build_file};
use crate::host::{Category, NameCollector};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;

    let listings: Vec<CategoryListing> = selected_categories(&cmd.categories)
        .into_iter()
        .map(|category| CategoryListing {
            category,
            result: entries_for(&ctx, category),
        })
        .collect();
    let error_count = listings.iter().filter(|l| l.result.is_err()).count();

    Ok(CommandResult {
        summary: CommandSummary::List(ListSummary { listings }),
        error_count,
    })
}

/// The entries `generate` would write for `category`, with the same checks.
fn entries_for(ctx: &RunContext, category: Category) -> GenerateResult<Vec<ConstantEntry>> {
    let names = category.collector(&ctx.project_root).collect()?;
    let destination = ctx.config.destination(&ctx.project_root, category);
    let file = build_file(ctx.config.namespace(), &destination, &names)?;
    Ok(file.map(|f| f.entries).unwrap_or_default())
}
