//! Settings documents: the key/value node a host hands to save/load.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SettingsError;
use crate::value::ParamValue;

/// Write half of a settings document.
///
/// The registry calls [`set_value`](Self::set_value) once per parameter, in
/// registration order, during save.
pub trait SettingsSink {
    /// Store a value under the given key, replacing any previous value.
    fn set_value(&mut self, key: &str, value: ParamValue);
}

/// Read half of a settings document.
///
/// The registry calls [`get_value`](Self::get_value) once per parameter key
/// during load. A `None` result (missing key, or a value that is not a
/// scalar) leaves the parameter at its default.
pub trait SettingsSource {
    /// Look up the stored value for a key, if any.
    fn get_value(&self, key: &str) -> Option<ParamValue>;
}

/// A TOML-backed settings node for one effect instance.
///
/// One node corresponds to one effect in the host's session document. Keys
/// are the parameters' fixed names; values are native TOML scalars. Keys
/// serialize sorted, so the document is byte-deterministic for identical
/// parameter values.
///
/// # TOML Format
///
/// ```toml
/// cutoff = 640.0
/// enableLFO = true
/// order = 8
/// phase = 180.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsNode {
    entries: toml::Table,
}

impl SettingsNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a node from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the node to a TOML string.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(&self.entries)?)
    }

    /// Load a node from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Save the node to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| SettingsError::write_file(path, e))?;
        Ok(())
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the node has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the node contains the given key (of any type).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, returning whether it was present. Mostly useful in
    /// tests for simulating older documents with missing keys.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

impl SettingsSink for SettingsNode {
    fn set_value(&mut self, key: &str, value: ParamValue) {
        let value = match value {
            ParamValue::Bool(b) => toml::Value::Boolean(b),
            ParamValue::Int(i) => toml::Value::Integer(i),
            ParamValue::Float(f) => toml::Value::Float(f),
        };
        self.entries.insert(key.to_string(), value);
    }
}

impl SettingsSource for SettingsNode {
    fn get_value(&self, key: &str) -> Option<ParamValue> {
        match self.entries.get(key)? {
            toml::Value::Boolean(b) => Some(ParamValue::Bool(*b)),
            toml::Value::Integer(i) => Some(ParamValue::Int(*i)),
            toml::Value::Float(f) => Some(ParamValue::Float(*f)),
            // Strings, arrays, tables and datetimes are not parameter
            // scalars; the registry treats them as missing keys.
            _ => None,
        }
    }
}
