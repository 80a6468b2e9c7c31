//! Settings loader for `<config_dir>/formsmith/config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use formsmith_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const FORMSMITH_DIR: &str = "formsmith";

/// Default location of the settings file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(FORMSMITH_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Read and parse a settings file, reporting why it could not be used
pub fn read_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {:?}", config_path))?;

    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {:?}: {}", config_path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("config.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[form]
title = "Faculty Card"
preset_labels = ["Professor Name", "Office"]

[clipboard]
ack_duration_ms = 3000
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings.form.title, "Faculty Card");
        assert_eq!(settings.form.preset_labels.len(), 2);
        assert_eq!(settings.clipboard.ack_duration_ms, 3000);
        assert!(settings.behavior.confirm_clear);
    }

    #[test]
    fn test_load_settings_invalid_toml_uses_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[form\ntitle = ").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_read_settings_reports_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[behavior]\nconfirm_clear = \"sometimes\"\n").unwrap();

        let err = read_settings(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_read_settings_reports_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_settings(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("formsmith/config.toml"));
        }
    }
}
