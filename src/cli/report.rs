//! Report formatting and printing utilities.
//!
//! Separate from the generator so it can be used as a library without any
//! console output.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CategoryListing, CommandResult, CommandSummary, GenerateSummary, InitSummary, ListSummary,
    TargetReport,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::emit::{escape_identifier, string_literal};
use crate::core::{Mode, OutcomeKind};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Mark for targets that were left alone.
pub const SKIP_MARK: &str = "-";

/// Print a command result to stdout, warnings to stderr.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print a command result to custom writers.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, out, err),
        CommandSummary::List(summary) => print_list(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out),
    }
}

/// Shows `path` relative to `root` when it lies inside it.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn print_generate<W: Write, E: Write>(summary: &GenerateSummary, out: &mut W, err: &mut E) {
    for target in &summary.targets {
        print_target(target, &summary.project_root, out, err);
    }

    let stale = summary
        .targets
        .iter()
        .filter(|t| matches!(&t.result, Ok(o) if o.kind == OutcomeKind::Stale))
        .count();
    if summary.mode == Mode::Check && stale > 0 {
        let _ = writeln!(
            out,
            "{} file(s) out of date. Run {} to update them.",
            stale,
            "unity-constants generate".cyan()
        );
    }
}

fn print_target<W: Write, E: Write>(target: &TargetReport, root: &Path, out: &mut W, err: &mut E) {
    let path = display_path(&target.path, root);

    let outcome = match &target.result {
        Ok(outcome) => outcome,
        Err(error) => {
            let _ = writeln!(
                out,
                "{} {} {}: {}",
                FAILURE_MARK.red(),
                "Failed".red().bold(),
                path,
                error
            );
            return;
        }
    };

    let _ = match outcome.kind {
        OutcomeKind::Written { constants } => writeln!(
            out,
            "{} {} {} ({} {})",
            SUCCESS_MARK.green(),
            "Generated".green().bold(),
            path,
            constants,
            if constants == 1 { "constant" } else { "constants" }
        ),
        OutcomeKind::NoNamesFound => writeln!(
            out,
            "{} {} {}: no {} found",
            SKIP_MARK.yellow(),
            "Skipped".yellow().bold(),
            path,
            target.category.label()
        ),
        OutcomeKind::UpToDate => writeln!(out, "{} {} is up to date", SUCCESS_MARK.green(), path),
        OutcomeKind::Stale => writeln!(
            out,
            "{} {} is {}",
            FAILURE_MARK.red(),
            path,
            "out of date".red().bold()
        ),
    };

    if let Some(warning) = &outcome.refresh_warning {
        let _ = writeln!(
            err,
            "{} failed to refresh {}: {}",
            "warning:".bold().yellow(),
            path,
            warning
        );
    }
}

fn print_list<W: Write>(summary: &ListSummary, out: &mut W) {
    for (i, listing) in summary.listings.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        print_listing(listing, out);
    }
}

fn print_listing<W: Write>(listing: &CategoryListing, out: &mut W) {
    let label = listing.category.label();

    let entries = match &listing.result {
        Ok(entries) => entries,
        Err(error) => {
            let _ = writeln!(out, "{} {}: {}", FAILURE_MARK.red(), label.bold(), error);
            return;
        }
    };

    if entries.is_empty() {
        let _ = writeln!(out, "{}: {}", label.bold(), "none found".dimmed());
        return;
    }

    let _ = writeln!(out, "{} ({})", label.bold(), entries.len());

    let names: Vec<String> = entries
        .iter()
        .map(|e| escape_identifier(e.identifier.as_str()))
        .collect();
    let width = names.iter().map(|n| n.width()).max().unwrap_or(0);

    for (name, entry) in names.iter().zip(entries) {
        let padding = " ".repeat(width - name.width());
        let _ = writeln!(
            out,
            "  {}{} = {}",
            name.cyan(),
            padding,
            string_literal(&entry.value)
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, out: &mut W) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
