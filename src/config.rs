//! Configuration import.
//! Loads a flat JSON object and turns every top-level key into an
//! environment assignment. The assignments are returned as a typed
//! [`Environment`] that later stages receive explicitly.

pub use crate::document::config_path;

use crate::document::{stringify, Document};
use crate::error::Result;
use indexmap::IndexMap;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Environment assignments imported from a configuration file, in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Resolved path of the file the assignments were read from
    pub source: PathBuf,
    vars: IndexMap<String, String>,
}

impl Environment {
    /// Builds an environment from an already parsed document.
    pub fn from_document<P: AsRef<Path>>(source: P, document: Document) -> Self {
        let vars = document
            .into_entries()
            .map(|(key, value)| {
                let value = stringify(&value);
                (key, value)
            })
            .collect();
        Self { source: source.as_ref().to_path_buf(), vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Writes every assignment into the process environment.
    ///
    /// Keys that the platform cannot store (empty, or containing `=` or NUL)
    /// are skipped with a warning.
    pub fn export(&self) {
        for (key, value) in self.iter() {
            if key.is_empty() || key.contains('=') || key.contains('\0') || value.contains('\0') {
                log::warn!("Skipping environment variable {key:?}: invalid name or value");
                continue;
            }
            debug!("Setting {key}");
            std::env::set_var(key, value);
        }
    }
}

/// Imports environment assignments from a JSON configuration file.
///
/// `.json` is appended to `config_file` when it does not already end with it.
///
/// # Errors
/// * `Error::ConfigMissing` if the resolved file does not exist
/// * `Error::InvalidConfig` if the file is not a JSON object
pub fn import_config<P: AsRef<Path>>(config_file: P) -> Result<Environment> {
    let (path, document) = Document::load(config_file)?;
    let environment = Environment::from_document(&path, document);
    info!("Imported configuration from {}", path.display());
    debug!("{} variable(s) imported", environment.len());
    Ok(environment)
}
