//! Configuration file parsing for Formsmith
//!
//! Supports `<config_dir>/formsmith/config.toml` (or an explicit path given
//! on the command line). Form data itself is never persisted.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, read_settings};
pub use types::*;
