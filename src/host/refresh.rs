use std::{path::Path, process::Command};

use anyhow::{Context, Result, bail};

/// Tells the host that a generated file changed.
///
/// Called once per written file. Errors are reported as warnings by the
/// caller; the written file stays valid either way.
pub trait Refresh {
    fn refresh(&self, path: &Path) -> Result<()>;
}

/// Leaves re-importing to the editor, which picks up changed files on focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRefresh;

impl Refresh for NoRefresh {
    fn refresh(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Runs an external command with the written path as its last argument.
#[derive(Debug, Clone)]
pub struct CommandRefresh {
    program: String,
    args: Vec<String>,
}

impl CommandRefresh {
    /// Builds a refresher from `[program, args...]`; `None` when empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Refresh for CommandRefresh {
    fn refresh(&self, path: &Path) -> Result<()> {
        tracing::debug!(program = %self.program, path = %path.display(), "running refresh command");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to run refresh command `{}`", self.program))?;

        if !status.success() {
            bail!("Refresh command `{}` exited with {}", self.program, status);
        }
        Ok(())
    }
}

/// Picks the refresher for a configured command line.
pub fn refresher_for(argv: &[String]) -> Box<dyn Refresh> {
    match CommandRefresh::from_argv(argv) {
        Some(command) => Box::new(command),
        None => Box::new(NoRefresh),
    }
}
