use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init, list::list},
};

/// Dispatches to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with per-target results and the failure count
/// - `Err` if the command cannot start (e.g., invalid config, not a Unity project)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
