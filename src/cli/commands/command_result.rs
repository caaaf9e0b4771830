use std::path::PathBuf;

use crate::core::{ConstantEntry, GenerateResult, Mode, Outcome, OutcomeKind};
use crate::host::Category;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    List(ListSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub mode: Mode,
    /// Paths in the report are shown relative to this directory.
    pub project_root: PathBuf,
    pub targets: Vec<TargetReport>,
}

#[derive(Debug)]
pub struct TargetReport {
    pub category: Category,
    pub path: PathBuf,
    pub result: GenerateResult<Outcome>,
}

impl TargetReport {
    /// Failed, or out of date in check mode.
    pub fn is_error(&self) -> bool {
        match &self.result {
            Ok(outcome) => outcome.kind == OutcomeKind::Stale,
            Err(_) => true,
        }
    }
}

#[derive(Debug)]
pub struct ListSummary {
    pub listings: Vec<CategoryListing>,
}

#[derive(Debug)]
pub struct CategoryListing {
    pub category: Category,
    /// Entries in declaration order; empty when the project has no names.
    pub result: GenerateResult<Vec<ConstantEntry>>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Failed targets (and stale files in check mode).
    pub error_count: usize,
}
