//! The boundary to the Unity project.
//!
//! Everything that knows how names are stored or how the editor is notified
//! lives here. The generator only sees the [`NameCollector`] and [`Refresh`]
//! traits, so other integrations can plug in their own sources.

pub mod collectors;
pub mod refresh;
pub mod settings;

use std::path::Path;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;

use crate::core::CollectError;

pub use collectors::{AxisNames, LayerNames, NameList, SortingLayerNames, TagNames};
pub use refresh::{CommandRefresh, NoRefresh, Refresh, refresher_for};
pub use settings::ProjectSettings;

/// Produces the raw names for one constants file.
///
/// Implementations read their source on every call. A source with no names
/// returns an empty list; an unreadable or malformed one returns an error
/// rather than a partial list.
#[enum_dispatch]
pub trait NameCollector {
    fn collect(&self) -> Result<Vec<String>, CollectError>;
}

/// The built-in collectors.
#[enum_dispatch(NameCollector)]
#[derive(Debug, Clone)]
pub enum Collector {
    Axes(AxisNames),
    Tags(TagNames),
    SortingLayers(SortingLayerNames),
    Layers(LayerNames),
    List(NameList),
}

/// A kind of project setting that gets its own constants file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Category {
    Axes,
    Tags,
    SortingLayers,
    Layers,
}

impl Category {
    pub fn all() -> [Self; 4] {
        [Self::Axes, Self::Tags, Self::SortingLayers, Self::Layers]
    }

    /// Human-readable name, as used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Axes => "input axes",
            Self::Tags => "tags",
            Self::SortingLayers => "sorting layers",
            Self::Layers => "layers",
        }
    }

    pub fn collector(self, project_root: &Path) -> Collector {
        match self {
            Self::Axes => AxisNames::new(project_root).into(),
            Self::Tags => TagNames::new(project_root).into(),
            Self::SortingLayers => SortingLayerNames::new(project_root).into(),
            Self::Layers => LayerNames::new(project_root).into(),
        }
    }
}
