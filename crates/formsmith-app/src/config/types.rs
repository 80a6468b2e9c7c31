//! Configuration types for Formsmith
//!
//! Defines `Settings` and its sections, mirroring the layout of
//! `config.toml`:
//!
//! ```toml
//! [form]
//! title = "Professor Summary App"
//! preset_labels = ["Professor Name", "Department"]
//!
//! [behavior]
//! confirm_clear = true
//!
//! [clipboard]
//! ack_duration_ms = 2000
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default form title
pub const DEFAULT_TITLE: &str = "Professor Summary App";

/// Default time the "Copied!" acknowledgment stays visible
pub const DEFAULT_ACK_DURATION_MS: u64 = 2000;

const MIN_ACK_DURATION_MS: u64 = 250;
const MAX_ACK_DURATION_MS: u64 = 10_000;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub form: FormSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

/// Initial form contents
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormSettings {
    /// Title shown in the header and stamped on generated output
    #[serde(default = "default_title")]
    pub title: String,

    /// Labels of the fields the form starts with; empty = one blank field
    #[serde(default)]
    pub preset_labels: Vec<String>,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            preset_labels: Vec::new(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Interaction behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before clearing every value
    #[serde(default = "default_true")]
    pub confirm_clear: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_clear: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Clipboard feedback
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClipboardSettings {
    /// How long "Copied!" stays visible, in milliseconds
    #[serde(default = "default_ack_duration_ms")]
    pub ack_duration_ms: u64,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            ack_duration_ms: default_ack_duration_ms(),
        }
    }
}

fn default_ack_duration_ms() -> u64 {
    DEFAULT_ACK_DURATION_MS
}

impl ClipboardSettings {
    /// Acknowledgment duration, clamped to 250ms..=10s
    pub fn ack_duration(&self) -> Duration {
        Duration::from_millis(
            self.ack_duration_ms
                .clamp(MIN_ACK_DURATION_MS, MAX_ACK_DURATION_MS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.form.title, "Professor Summary App");
        assert!(settings.form.preset_labels.is_empty());
        assert!(settings.behavior.confirm_clear);
        assert_eq!(settings.clipboard.ack_duration_ms, 2000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [form]
            preset_labels = ["Professor Name", "Department"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.form.title, DEFAULT_TITLE);
        assert_eq!(
            settings.form.preset_labels,
            vec!["Professor Name".to_string(), "Department".to_string()]
        );
        assert!(settings.behavior.confirm_clear);
    }

    #[test]
    fn test_full_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [form]
            title = "Lab Roster"

            [behavior]
            confirm_clear = false

            [clipboard]
            ack_duration_ms = 1500
            "#,
        )
        .unwrap();

        assert_eq!(settings.form.title, "Lab Roster");
        assert!(!settings.behavior.confirm_clear);
        assert_eq!(
            settings.clipboard.ack_duration(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_ack_duration_is_clamped() {
        let short = ClipboardSettings { ack_duration_ms: 0 };
        let long = ClipboardSettings {
            ack_duration_ms: 600_000,
        };
        assert_eq!(short.ack_duration(), Duration::from_millis(250));
        assert_eq!(long.ack_duration(), Duration::from_secs(10));
    }
}
