//! One generation run: collect names, build the file, write it, notify the host.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use super::{
    emit::{ConstantEntry, GeneratedFile},
    error::{GenerateError, GenerateResult},
    identifier::{Identifier, is_valid_identifier, sanitize},
};
use crate::host::{NameCollector, Refresh};

/// Whether a run writes files or only compares them with what is on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Write,
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The file was (re)written with this many constants.
    Written { constants: usize },
    /// The collector returned no names; nothing was written.
    NoNamesFound,
    /// Check mode: the file on disk matches the rendered output.
    UpToDate,
    /// Check mode: the file is missing or differs.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub path: PathBuf,
    pub kind: OutcomeKind,
    /// Set when the host refresh failed after a successful write.
    pub refresh_warning: Option<String>,
}

impl Outcome {
    fn new(path: &Path, kind: OutcomeKind) -> Self {
        Self {
            path: path.to_path_buf(),
            kind,
            refresh_warning: None,
        }
    }
}

/// Generates (or checks) one constants file.
///
/// Names are collected fresh on every call. An empty name list is not an
/// error: the destination is left alone and `NoNamesFound` is returned.
/// Any error leaves a previously generated file untouched.
pub fn generate<C, R>(
    collector: &C,
    namespace: Option<&str>,
    destination: &Path,
    refresher: &R,
    mode: Mode,
) -> GenerateResult<Outcome>
where
    C: NameCollector + ?Sized,
    R: Refresh + ?Sized,
{
    let names = collector.collect()?;
    tracing::debug!(
        path = %destination.display(),
        count = names.len(),
        "collected names"
    );

    let Some(file) = build_file(namespace, destination, &names)? else {
        return Ok(Outcome::new(destination, OutcomeKind::NoNamesFound));
    };
    let Some(source) = file.render() else {
        return Ok(Outcome::new(destination, OutcomeKind::NoNamesFound));
    };

    if mode == Mode::Check {
        let kind = match fs::read(destination) {
            Ok(existing) if existing == source.as_bytes() => OutcomeKind::UpToDate,
            Ok(_) => OutcomeKind::Stale,
            Err(err) if err.kind() == io::ErrorKind::NotFound => OutcomeKind::Stale,
            Err(source) => {
                return Err(GenerateError::Io {
                    path: destination.to_path_buf(),
                    source,
                });
            }
        };
        return Ok(Outcome::new(destination, kind));
    }

    write_atomic(destination, &source)?;
    tracing::debug!(
        path = %destination.display(),
        constants = file.entries.len(),
        "wrote constants file"
    );

    let mut outcome = Outcome::new(
        destination,
        OutcomeKind::Written {
            constants: file.entries.len(),
        },
    );
    if let Err(err) = refresher.refresh(destination) {
        tracing::warn!(path = %destination.display(), "host refresh failed: {:#}", err);
        outcome.refresh_warning = Some(format!("{:#}", err));
    }

    Ok(outcome)
}

/// One file to generate: where the names come from and where they go.
#[derive(Debug, Clone)]
pub struct Target<C> {
    pub collector: C,
    pub destination: PathBuf,
}

/// Runs [`generate`] for each target in order.
///
/// Targets are independent: a failure is recorded in that target's slot and
/// the remaining targets still run.
pub fn generate_all<C, R>(
    targets: &[Target<C>],
    namespace: Option<&str>,
    refresher: &R,
    mode: Mode,
) -> Vec<GenerateResult<Outcome>>
where
    C: NameCollector,
    R: Refresh + ?Sized,
{
    targets
        .iter()
        .map(|target| {
            let result = generate(&target.collector, namespace, &target.destination, refresher, mode);
            if let Err(err) = &result {
                tracing::debug!(path = %target.destination.display(), "generation failed: {}", err);
            }
            result
        })
        .collect()
}

/// Builds the in-memory file for `names`, or `None` when there are no names.
///
/// The class name comes from the destination's file stem. Fails on an empty
/// name, on two different names sharing an identifier, and on a constant
/// named like the class. A name repeated verbatim is declared once.
pub fn build_file(
    namespace: Option<&str>,
    destination: &Path,
    names: &[String],
) -> GenerateResult<Option<GeneratedFile>> {
    if names.is_empty() {
        return Ok(None);
    }

    let namespace = namespace.filter(|ns| !ns.is_empty());
    if let Some(ns) = namespace {
        validate_namespace(ns)?;
    }

    let container = container_name(destination)?;

    let mut seen: HashMap<Identifier, &str> = HashMap::new();
    let mut entries = Vec::with_capacity(names.len());
    for (index, raw) in names.iter().enumerate() {
        let identifier = sanitize(raw).ok_or(GenerateError::InvalidRawName { index })?;

        if let Some(first) = seen.get(&identifier) {
            if *first == raw.as_str() {
                continue;
            }
            return Err(GenerateError::DuplicateIdentifier {
                identifier: identifier.to_string(),
                first: first.to_string(),
                second: raw.clone(),
            });
        }
        if identifier == container {
            return Err(GenerateError::ContainerClash {
                identifier: identifier.to_string(),
                raw: raw.clone(),
            });
        }

        seen.insert(identifier.clone(), raw);
        entries.push(ConstantEntry::new(identifier, raw.as_str()));
    }

    Ok(Some(GeneratedFile {
        namespace: namespace.map(str::to_string),
        container,
        entries,
    }))
}

/// Derives the class name from a path's file stem (`Sorting Layers.cs` ->
/// `SortingLayers`).
pub fn container_name(path: &Path) -> GenerateResult<Identifier> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(sanitize)
        .ok_or_else(|| GenerateError::InvalidContainerName {
            path: path.to_path_buf(),
        })
}

/// Accepts dotted namespaces such as `Game.Constants`.
pub fn validate_namespace(namespace: &str) -> GenerateResult<()> {
    if namespace.split('.').all(is_valid_identifier) {
        Ok(())
    } else {
        Err(GenerateError::InvalidNamespace {
            namespace: namespace.to_string(),
        })
    }
}

/// Replaces `path` with `contents` in one step.
///
/// Missing parent directories are created. The data goes to a temporary file
/// next to the target which is then renamed over it, so a failure never
/// leaves a truncated file behind.
pub fn write_atomic(path: &Path, contents: &str) -> GenerateResult<()> {
    let io_err = |source: io::Error| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_err)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(io_err)?;
    temp.write_all(contents.as_bytes()).map_err(io_err)?;
    temp.flush().map_err(io_err)?;
    temp.persist(path).map_err(|err| io_err(err.error))?;

    Ok(())
}
