use std::{collections::HashSet, path::Path};

use super::{NameCollector, settings::ProjectSettings};
use crate::core::CollectError;

/// Tags every Unity project has; they are not stored in `TagManager.asset`.
pub const BUILTIN_TAGS: &[&str] = &[
    "Untagged",
    "Respawn",
    "Finish",
    "EditorOnly",
    "MainCamera",
    "Player",
    "GameController",
];

/// Input axis names from `InputManager.asset`.
///
/// An axis name may be configured several times (keyboard and joystick
/// variants); each name is reported once, at its first position.
#[derive(Debug, Clone)]
pub struct AxisNames {
    settings: ProjectSettings,
}

impl AxisNames {
    pub fn new(project_root: &Path) -> Self {
        Self {
            settings: ProjectSettings::new(project_root),
        }
    }
}

impl NameCollector for AxisNames {
    fn collect(&self) -> Result<Vec<String>, CollectError> {
        let manager = self.settings.input_manager()?;
        let mut seen = HashSet::new();
        Ok(manager
            .axes
            .iter()
            .map(|axis| axis.name.clone())
            .filter(|name| !name.is_empty() && seen.insert(name.clone()))
            .collect())
    }
}

/// Built-in tags followed by the project's own tags.
#[derive(Debug, Clone)]
pub struct TagNames {
    settings: ProjectSettings,
}

impl TagNames {
    pub fn new(project_root: &Path) -> Self {
        Self {
            settings: ProjectSettings::new(project_root),
        }
    }
}

impl NameCollector for TagNames {
    fn collect(&self) -> Result<Vec<String>, CollectError> {
        let manager = self.settings.tag_manager()?;
        Ok(BUILTIN_TAGS
            .iter()
            .map(|tag| tag.to_string())
            .chain(manager.tags.into_iter().filter(|tag| !tag.is_empty()))
            .collect())
    }
}

/// Sorting layer names in their configured order.
#[derive(Debug, Clone)]
pub struct SortingLayerNames {
    settings: ProjectSettings,
}

impl SortingLayerNames {
    pub fn new(project_root: &Path) -> Self {
        Self {
            settings: ProjectSettings::new(project_root),
        }
    }
}

impl NameCollector for SortingLayerNames {
    fn collect(&self) -> Result<Vec<String>, CollectError> {
        let manager = self.settings.tag_manager()?;
        Ok(manager
            .sorting_layers
            .iter()
            .map(|layer| layer.name.clone())
            .filter(|name| !name.is_empty())
            .collect())
    }
}

/// Names of the used physics layer slots.
#[derive(Debug, Clone)]
pub struct LayerNames {
    settings: ProjectSettings,
}

impl LayerNames {
    pub fn new(project_root: &Path) -> Self {
        Self {
            settings: ProjectSettings::new(project_root),
        }
    }
}

impl NameCollector for LayerNames {
    fn collect(&self) -> Result<Vec<String>, CollectError> {
        let manager = self.settings.tag_manager()?;
        Ok(manager
            .layers
            .into_iter()
            .filter(|layer| !layer.is_empty())
            .collect())
    }
}

/// Names supplied directly by the caller.
#[derive(Debug, Clone, Default)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl NameCollector for NameList {
    fn collect(&self) -> Result<Vec<String>, CollectError> {
        Ok(self.names.clone())
    }
}
