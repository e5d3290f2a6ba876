//! Placeholder substitution in files under a target directory.
//! A transform document maps relative file paths to replacement maps; every
//! `${name}` in a listed file is replaced by the value given for `name`.

use crate::document::{stringify, Document};
use crate::error::Result;
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Placeholder name (without `${}`) to replacement text, applied in order.
pub type ReplacementMap = IndexMap<String, String>;

/// One entry of a transform document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    /// Path of the file relative to the target directory
    pub file: String,
    /// `None` when the entry's value is not a JSON object
    pub replacements: Option<ReplacementMap>,
}

impl Transformation {
    fn from_entry(file: String, value: serde_json::Value) -> Self {
        let replacements = match value {
            serde_json::Value::Object(map) => {
                Some(map.iter().map(|(name, value)| (name.clone(), stringify(value))).collect())
            }
            _ => None,
        };
        Self { file, replacements }
    }
}

/// Outcome of a transform run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransformReport {
    /// Files that were rewritten
    pub applied: Vec<PathBuf>,
    /// Listed files that do not exist under the target directory
    pub missing: Vec<PathBuf>,
    /// Entries whose value is not a replacement map
    pub skipped: Vec<String>,
}

/// Formats the literal token replaced for `name`.
pub fn placeholder(name: &str) -> String {
    format!("${{{name}}}")
}

/// Resolves a transform entry under `target_dir`.
///
/// Root and drive prefix components are dropped, so an absolute entry such as
/// `/etc/hosts` still names `target_dir/etc/hosts`.
pub fn target_path<P: AsRef<Path>>(target_dir: P, file: &str) -> PathBuf {
    let relative: PathBuf = Path::new(file)
        .components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect();
    target_dir.as_ref().join(relative)
}

/// Replaces every `${name}` occurrence for each entry of `replacements`.
///
/// Entries are applied first to last, so a value that introduces a
/// placeholder handled by a later entry is expanded again by that entry.
///
/// # Example
/// ```
/// use import_project::transform::{apply_replacements, ReplacementMap};
///
/// let mut replacements = ReplacementMap::new();
/// replacements.insert("NAME".to_string(), "World".to_string());
/// assert_eq!(apply_replacements("Hello ${NAME}!", &replacements), "Hello World!");
/// ```
pub fn apply_replacements(content: &str, replacements: &ReplacementMap) -> String {
    replacements
        .iter()
        .fold(content.to_string(), |content, (name, value)| {
            content.replace(&placeholder(name), value)
        })
}

/// Loads the transform document at `transform_file` (`.json` is appended when missing).
///
/// Replacement maps keep the order they are written in.
///
/// # Errors
/// * `Error::ConfigMissing` if the resolved file does not exist
/// * `Error::InvalidConfig` if the file is not a JSON object
pub fn load_transformations<P: AsRef<Path>>(transform_file: P) -> Result<Vec<Transformation>> {
    let (path, document) = Document::load(transform_file)?;
    debug!("{} transformation(s) listed in {}", document.len(), path.display());
    Ok(document
        .into_entries()
        .map(|(file, value)| Transformation::from_entry(file, value))
        .collect())
}

/// Rewrites one file in place. The file is read fully and written back
/// without a temporary copy.
fn transform_file(path: &Path, replacements: &ReplacementMap) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let updated = apply_replacements(&content, replacements);
    fs::write(path, updated)?;
    Ok(())
}

/// Applies a list of transformations to files under `target_dir`.
///
/// Missing files and non-object entries are reported with a warning and
/// skipped; they never abort the run.
///
/// # Errors
/// * `Error::IoError` if an existing file cannot be read or written
pub fn run_transformations<P: AsRef<Path>>(
    transformations: Vec<Transformation>,
    target_dir: P,
) -> Result<TransformReport> {
    let target_dir = target_dir.as_ref();
    let mut report = TransformReport::default();

    for Transformation { file, replacements } in transformations {
        let Some(replacements) = replacements else {
            warn!("Entry {file} is not a replacement map, skipping");
            report.skipped.push(file);
            continue;
        };

        let target_file = target_path(target_dir, &file);
        if !target_file.is_file() {
            warn!("Target file {} does not exist!", target_file.display());
            report.missing.push(target_file);
            continue;
        }

        transform_file(&target_file, &replacements)?;
        info!("Applied transformations to {}", target_file.display());
        report.applied.push(target_file);
    }

    Ok(report)
}

/// Loads `transform_file` and applies it to files under `target_dir`.
///
/// # Errors
/// See [`load_transformations`] and [`run_transformations`].
pub fn apply_transformations<P: AsRef<Path>, Q: AsRef<Path>>(
    transform_file: P,
    target_dir: Q,
) -> Result<TransformReport> {
    let transformations = load_transformations(transform_file)?;
    run_transformations(transformations, target_dir)
}
