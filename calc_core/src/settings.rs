//! # Settings
//!
//! User preferences stored as a small JSON file.
//!
//! ```json
//! {
//!   "safe_division": true,
//!   "show_status": true
//! }
//! ```
//!
//! Missing fields fall back to their defaults, so an empty object `{}` is a
//! valid settings file. Saves are atomic: write to `.tmp`, sync, rename.
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::settings::{load_settings, save_settings, Settings};
//! use std::path::Path;
//!
//! let path = Path::new("quotient.json");
//! save_settings(&Settings::default(), path)?;
//! let settings = load_settings(path)?;
//! assert!(settings.safe_division);
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Calculator preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start with safe division enabled
    pub safe_division: bool,

    /// Show the safe-division status indicator
    pub show_status: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            safe_division: true,
            show_status: true,
        }
    }
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: Settings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}

/// Save settings to a JSON file with atomic write semantics.
pub fn save_settings(settings: &Settings, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(settings).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), "settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quotient_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.safe_division);
        assert!(settings.show_status);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"safe_division": false}"#).unwrap();
        assert!(!settings.safe_division);
        assert!(settings.show_status);

        let empty: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");
        let settings = Settings {
            safe_division: false,
            show_status: false,
        };

        save_settings(&settings, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(&temp_settings_path("missing")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_settings_path("invalid");
        fs::write(&path, "{ not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }
}
