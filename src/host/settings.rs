//! Reading Unity `ProjectSettings/*.asset` files.
//!
//! Unity writes these as YAML 1.1 with a `%TAG !u!` directive and tagged
//! document headers (`--- !u!78 &1`). Both are dropped before the document is
//! handed to `serde_yaml`; only plain mappings and sequences remain.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::CollectError;

pub const PROJECT_SETTINGS_DIR: &str = "ProjectSettings";
pub const INPUT_MANAGER_ASSET: &str = "InputManager.asset";
pub const TAG_MANAGER_ASSET: &str = "TagManager.asset";

#[derive(Debug, Deserialize)]
struct InputManagerDocument {
    #[serde(rename = "InputManager")]
    input_manager: InputManager,
}

#[derive(Debug, Default, Deserialize)]
pub struct InputManager {
    #[serde(rename = "m_Axes", default)]
    pub axes: Vec<InputAxis>,
}

#[derive(Debug, Deserialize)]
pub struct InputAxis {
    #[serde(rename = "m_Name", default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct TagManagerDocument {
    #[serde(rename = "TagManager")]
    tag_manager: TagManager,
}

#[derive(Debug, Default, Deserialize)]
pub struct TagManager {
    #[serde(default)]
    pub tags: Vec<String>,
    /// One entry per layer slot; unused slots are empty.
    #[serde(default)]
    pub layers: Vec<String>,
    #[serde(rename = "m_SortingLayers", default)]
    pub sorting_layers: Vec<SortingLayer>,
}

#[derive(Debug, Deserialize)]
pub struct SortingLayer {
    #[serde(default)]
    pub name: String,
}

/// Location of a Unity project's settings files.
#[derive(Debug, Clone)]
pub struct ProjectSettings {
    dir: PathBuf,
}

impl ProjectSettings {
    pub fn new(project_root: &Path) -> Self {
        Self {
            dir: project_root.join(PROJECT_SETTINGS_DIR),
        }
    }

    pub fn input_manager_path(&self) -> PathBuf {
        self.dir.join(INPUT_MANAGER_ASSET)
    }

    pub fn tag_manager_path(&self) -> PathBuf {
        self.dir.join(TAG_MANAGER_ASSET)
    }

    pub fn input_manager(&self) -> Result<InputManager, CollectError> {
        let doc: InputManagerDocument = load_asset(&self.input_manager_path())?;
        Ok(doc.input_manager)
    }

    pub fn tag_manager(&self) -> Result<TagManager, CollectError> {
        let doc: TagManagerDocument = load_asset(&self.tag_manager_path())?;
        Ok(doc.tag_manager)
    }
}

/// Reads and parses one text-serialized asset.
pub fn load_asset<T: DeserializeOwned>(path: &Path) -> Result<T, CollectError> {
    let bytes = fs::read(path).map_err(|source| CollectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read settings asset");

    let Ok(content) = String::from_utf8(bytes) else {
        return Err(CollectError::NotTextSerialized {
            path: path.to_path_buf(),
        });
    };
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    if !content.trim_start().starts_with("%YAML") {
        return Err(CollectError::NotTextSerialized {
            path: path.to_path_buf(),
        });
    }

    serde_yaml::from_str(&strip_unity_tags(content)).map_err(|source| CollectError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Drops YAML directives and reduces Unity document headers to a bare `---`.
pub fn strip_unity_tags(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for line in content.lines() {
        if line.starts_with('%') {
            continue;
        }
        if line.starts_with("---") {
            out.push_str("---\n");
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
