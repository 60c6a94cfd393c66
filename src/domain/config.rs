use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Tool configuration.
///
/// Controls where registry snapshots are written and how they are
/// formatted. Registry state itself is never persisted; snapshots are the
/// only file this tool produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path the snapshot-export action writes to.
    pub export_path: PathBuf,

    /// Whether exported JSON is pretty-printed.
    pub pretty_export: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from("registry.json"),
            pretty_export: true,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content
    /// is invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML
    /// or if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }
}
