use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::generate::{container_name, validate_namespace};
use crate::host::Category;

pub const CONFIG_FILE_NAME: &str = ".unity-constants.json";

/// Directory inside the Unity project that holds scripts and other assets.
pub const ASSETS_DIR: &str = "Assets";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace wrapping every generated class; `null` or `""` for none.
    #[serde(default = "default_namespace")]
    pub namespace: Option<String>,
    #[serde(default = "default_project_root")]
    pub project_root: String,
    /// Output folder, relative to the project's `Assets` directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub files: OutputFiles,
    /// Program and arguments run after each written file; the file path is
    /// appended. Empty to disable.
    #[serde(default)]
    pub refresh_command: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFiles {
    #[serde(default = "default_axes_file")]
    pub axes: String,
    #[serde(default = "default_tags_file")]
    pub tags: String,
    #[serde(default = "default_sorting_layers_file")]
    pub sorting_layers: String,
    #[serde(default = "default_layers_file")]
    pub layers: String,
}

fn default_namespace() -> Option<String> {
    Some("UnityConstants".to_string())
}

fn default_project_root() -> String {
    "./".to_string()
}

fn default_output_dir() -> String {
    "Unity Constants".to_string()
}

fn default_axes_file() -> String {
    "Axes.cs".to_string()
}

fn default_tags_file() -> String {
    "Tags.cs".to_string()
}

fn default_sorting_layers_file() -> String {
    "SortingLayers.cs".to_string()
}

fn default_layers_file() -> String {
    "Layers.cs".to_string()
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            axes: default_axes_file(),
            tags: default_tags_file(),
            sorting_layers: default_sorting_layers_file(),
            layers: default_layers_file(),
        }
    }
}

impl OutputFiles {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Axes => &self.axes,
            Category::Tags => &self.tags,
            Category::SortingLayers => &self.sorting_layers,
            Category::Layers => &self.layers,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            project_root: default_project_root(),
            output_dir: default_output_dir(),
            files: OutputFiles::default(),
            refresh_command: Vec::new(),
        }
    }
}

impl Config {
    /// The namespace to emit, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    /// Validate configuration values.
    ///
    /// Returns an error for an invalid namespace, an output folder that
    /// escapes `Assets`, or a file name no class name can be derived from.
    pub fn validate(&self) -> Result<()> {
        if let Some(namespace) = self.namespace() {
            validate_namespace(namespace)
                .with_context(|| format!("Invalid 'namespace': \"{}\"", namespace))?;
        }

        let output_dir = Path::new(&self.output_dir);
        if output_dir
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            bail!(
                "Invalid 'outputDir': \"{}\" (must be a relative path inside {})",
                self.output_dir,
                ASSETS_DIR
            );
        }

        for category in Category::all() {
            let file = self.files.get(category);
            if file.is_empty() || Path::new(file).components().count() != 1 {
                bail!("Invalid file name for {}: \"{}\"", category.label(), file);
            }
            container_name(Path::new(file))
                .with_context(|| format!("Invalid file name for {}: \"{}\"", category.label(), file))?;
        }

        Ok(())
    }

    /// Destination of the generated file for `category`.
    pub fn destination(&self, project_root: &Path, category: Category) -> PathBuf {
        project_root
            .join(ASSETS_DIR)
            .join(&self.output_dir)
            .join(self.files.get(category))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn project_root(&self) -> PathBuf {
        self.base_dir.join(&self.config.project_root)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
