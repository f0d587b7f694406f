//! Persisted user settings.
//!
//! The dark-mode flag and chat display name live in a small JSON file
//! wherever the host points us. A missing file is not an error, it just
//! means defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Display name used when none has been stored.
pub const DEFAULT_USERNAME: &str = "Anonymous";

/// User settings persisted across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Whether the dark theme was active when the app last saved.
    pub dark_mode: bool,
    /// Display name attached to outgoing chat messages.
    pub username: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist. Malformed JSON or an unreadable file is an error.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("driftfield-settings-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load(Path::new("/definitely/not/here.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.username, DEFAULT_USERNAME);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = scratch_path("roundtrip");
        let settings = Settings {
            dark_mode: true,
            username: "renn".to_string(),
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unknown_and_missing_fields_fall_back_to_defaults() {
        let path = scratch_path("partial");
        std::fs::write(&path, r#"{"dark_mode": true, "legacy_field": 3}"#).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.username, DEFAULT_USERNAME);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let path = scratch_path("malformed");
        std::fs::write(&path, "{not json").unwrap();

        assert!(Settings::load(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }
}
