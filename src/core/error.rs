use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for a single generation target.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Failure while reading names from the host project.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The asset was saved with binary serialization.
    #[error(
        "{} is not a text asset (set Asset Serialization to \"Force Text\" in the Unity editor)",
        .path.display()
    )]
    NotTextSerialized { path: PathBuf },
}

/// Failure while generating one constants file.
///
/// Every variant aborts the target it was raised for; a file already on disk
/// at the destination is left untouched.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Collect(#[from] CollectError),

    /// An empty name was handed to the sanitizer.
    #[error("name #{} is empty", .index + 1)]
    InvalidRawName { index: usize },

    #[error("\"{first}\" and \"{second}\" both map to the identifier `{identifier}`")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    /// A constant would be named like the class holding it.
    #[error("\"{raw}\" maps to `{identifier}`, which is also the class name")]
    ContainerClash { identifier: String, raw: String },

    #[error("invalid namespace \"{namespace}\"")]
    InvalidNamespace { namespace: String },

    #[error("cannot derive a class name from {}", .path.display())]
    InvalidContainerName { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
