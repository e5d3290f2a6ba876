//! Project structure setup.
//! Replaces the destination directory with a full copy of the source tree.

use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// What a structure copy created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    pub directories: usize,
    pub files: usize,
}

/// Absolute form of `path` with symlinks resolved, for paths that may not exist yet.
///
/// The longest existing prefix is canonicalized; the remaining components
/// are applied lexically, the way `create_dir_all` would create them.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut existing = PathBuf::new();
    let mut components = absolute.components().peekable();
    while let Some(component) = components.peek() {
        let candidate = existing.join(component);
        if !candidate.exists() {
            break;
        }
        existing = candidate;
        components.next();
    }

    let mut resolved = fs::canonicalize(&existing)?;
    for component in components {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Returns true when `destination` is `source`, lies below it, or contains it.
pub fn overlaps_source<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<bool> {
    let source = resolve_path(source.as_ref())?;
    let destination = resolve_path(destination.as_ref())?;
    Ok(destination.starts_with(&source) || source.starts_with(&destination))
}

fn remove_destination(destination: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(destination) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(()),
    };
    debug!("Removing existing destination {}", destination.display());
    if metadata.is_dir() {
        fs::remove_dir_all(destination)?;
    } else {
        fs::remove_file(destination)?;
    }
    Ok(())
}

/// Copies `source` to `destination`, removing `destination` first if it exists.
///
/// Symbolic links inside the source are followed and their targets copied as
/// regular files or directories. There is no rollback: if the copy fails
/// halfway the destination is left partially populated.
///
/// # Errors
/// * `Error::SourceDirMissing` if `source` is not an existing directory
/// * `Error::InvalidDestination` if `destination` and `source` overlap
/// * `Error::IoError` / `Error::WalkError` if removing or copying fails
pub fn setup_project_structure<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
) -> Result<CopySummary> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if !source.is_dir() {
        return Err(Error::SourceDirMissing { path: source.to_path_buf() });
    }
    if overlaps_source(source, destination)? {
        return Err(Error::InvalidDestination {
            source_dir: source.to_path_buf(),
            destination_dir: destination.to_path_buf(),
        });
    }

    remove_destination(destination)?;

    let mut summary = CopySummary::default();
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        // Entries always live under the walk root.
        let relative_path = path.strip_prefix(source).unwrap_or(path);
        let target_path = destination.join(relative_path);

        if entry.file_type().is_dir() {
            debug!("Creating directory: {}", target_path.display());
            fs::create_dir_all(&target_path)?;
            summary.directories += 1;
        } else {
            debug!("Copying file: {}", target_path.display());
            fs::copy(path, &target_path)?;
            summary.files += 1;
        }
    }

    info!(
        "Copied project structure from {} to {}",
        source.display(),
        destination.display()
    );
    Ok(summary)
}
