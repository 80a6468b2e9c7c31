//! Formsmith - build a list of label/value fields and turn it into a
//! copyable plain-text summary.
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use formsmith_app::config::{load_settings, Settings};
use formsmith_core::prelude::*;

/// Formsmith - a terminal form builder
#[derive(Parser, Debug)]
#[command(name = "formsmith")]
#[command(about = "Build label/value fields and generate a copyable summary", long_about = None)]
struct Args {
    /// Form title (overrides the config file)
    #[arg(long)]
    title: Option<String>,

    /// Start with a field with this label; repeat for more fields
    #[arg(long = "label", value_name = "LABEL")]
    labels: Vec<String>,

    /// Path to a config file (default: <config dir>/formsmith/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    /// Command-line values win over the config file
    fn apply_to(self, settings: &mut Settings) {
        if let Some(title) = self.title {
            settings.form.title = title;
        }
        if !self.labels.is_empty() {
            settings.form.preset_labels = self.labels;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    formsmith_core::logging::init()?;

    let mut settings = load_settings(args.config.as_deref());
    args.apply_to(&mut settings);

    let result = formsmith_tui::run(settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Formsmith exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["formsmith"]);
        assert!(args.title.is_none());
        assert!(args.labels.is_empty());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_repeated_labels() {
        let args = Args::parse_from([
            "formsmith",
            "--title",
            "Faculty Contact",
            "--label",
            "Name",
            "--label",
            "Office",
        ]);
        assert_eq!(args.title.as_deref(), Some("Faculty Contact"));
        assert_eq!(args.labels, ["Name", "Office"]);
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut settings = Settings::default();
        settings.form.preset_labels = vec!["From config".into()];

        Args::parse_from(["formsmith", "--title", "CLI", "--label", "Name"]).apply_to(&mut settings);

        assert_eq!(settings.form.title, "CLI");
        assert_eq!(settings.form.preset_labels, ["Name"]);
    }

    #[test]
    fn test_no_cli_values_keep_config() {
        let mut settings = Settings::default();
        settings.form.title = "From config".into();
        settings.form.preset_labels = vec!["Email".into()];

        Args::parse_from(["formsmith"]).apply_to(&mut settings);

        assert_eq!(settings.form.title, "From config");
        assert_eq!(settings.form.preset_labels, ["Email"]);
    }
}
