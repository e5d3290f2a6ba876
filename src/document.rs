//! JSON configuration documents.
//! Both the config importer and the transformer read a top-level JSON object
//! whose key order matters, so documents are loaded into an [`IndexMap`].

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Suffix appended to configuration paths that do not already carry it.
pub const CONFIG_EXTENSION: &str = ".json";

/// A parsed top-level JSON object with its keys in document order.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, serde_json::Value>);

impl Document {
    /// Parses a JSON object from a string.
    ///
    /// # Errors
    /// * `Error::InvalidConfig` if the content is not JSON or the top level is not an object
    pub fn parse<P: AsRef<Path>>(content: &str, origin: P) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::InvalidConfig {
            path: origin.as_ref().to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Reads and parses the document at `path`, after `.json` resolution.
    ///
    /// # Errors
    /// * `Error::ConfigMissing` if the resolved file does not exist
    /// * `Error::InvalidConfig` if it is not a JSON object
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(PathBuf, Self)> {
        let path = config_path(path);
        if !path.is_file() {
            return Err(Error::ConfigMissing { path });
        }
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        let document = Self::parse(&content, &path)?;
        Ok((path, document))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_entries(self) -> indexmap::map::IntoIter<String, serde_json::Value> {
        self.0.into_iter()
    }
}

/// Resolves a configuration path, appending `.json` when it is missing.
///
/// # Example
/// ```
/// use import_project::document::config_path;
/// use std::path::PathBuf;
///
/// assert_eq!(config_path("settings"), PathBuf::from("settings.json"));
/// assert_eq!(config_path("settings.json"), PathBuf::from("settings.json"));
/// ```
pub fn config_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.to_string_lossy().ends_with(CONFIG_EXTENSION) {
        path.to_path_buf()
    } else {
        let mut raw = path.as_os_str().to_os_string();
        raw.push(CONFIG_EXTENSION);
        PathBuf::from(raw)
    }
}

/// Converts a JSON value to the string stored in the environment or written
/// into a target file.
///
/// Strings are taken verbatim, `null` becomes the empty string and every
/// other value uses its compact JSON text.
pub fn stringify(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
