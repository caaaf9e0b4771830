use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::super::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::host::{Category, settings::PROJECT_SETTINGS_DIR};

/// Configuration with command-line overrides applied.
pub struct RunContext {
    pub config: Config,
    pub project_root: PathBuf,
}

impl RunContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        let loaded = load_config(&cwd)?;
        let mut project_root = loaded.project_root();
        let mut config = loaded.config;

        if let Some(project) = &common.project {
            project_root = cwd.join(project);
        }
        if let Some(namespace) = &common.namespace {
            config.namespace = Some(namespace.clone());
        }
        if common.no_namespace {
            config.namespace = None;
        }
        if let Some(output_dir) = &common.output_dir {
            config.output_dir = output_dir.clone();
        }
        config.validate()?;

        if !project_root.join(PROJECT_SETTINGS_DIR).is_dir() {
            bail!(
                "{} is not a Unity project (no {} directory)",
                project_root.display(),
                PROJECT_SETTINGS_DIR
            );
        }
        tracing::debug!(
            project = %project_root.display(),
            from_file = loaded.from_file,
            "resolved project"
        );

        Ok(Self {
            config,
            project_root,
        })
    }
}

/// The requested categories without repeats, or all of them.
pub fn selected_categories(requested: &[Category]) -> Vec<Category> {
    if requested.is_empty() {
        return Category::all().to_vec();
    }
    let mut selected = Vec::with_capacity(requested.len());
    for category in requested {
        if !selected.contains(category) {
            selected.push(*category);
        }
    }
    selected
}
