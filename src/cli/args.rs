//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Write (or `--check`) the constants files
//! - `list`: Show the names and identifiers that would be generated
//! - `init`: Create a configuration file with the defaults

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::host::Category;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `generate` and `list`.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Unity project root (overrides config file)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Namespace for the generated classes (overrides config file)
    #[arg(long, conflicts_with = "no_namespace")]
    pub namespace: Option<String>,

    /// Emit the classes without a namespace
    #[arg(long)]
    pub no_namespace: bool,

    /// Output folder inside Assets (overrides config file)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Settings to generate (default: all)
    #[arg(value_enum)]
    pub categories: Vec<Category>,

    /// Only verify that the files on disk are current (no writes)
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Settings to list (default: all)
    #[arg(value_enum)]
    pub categories: Vec<Category>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate C# constants for input axes, tags, sorting layers and layers
    Generate(GenerateCommand),
    /// Print the constants that would be generated
    List(ListCommand),
    /// Initialize a new .unity-constants.json configuration file
    Init,
}
