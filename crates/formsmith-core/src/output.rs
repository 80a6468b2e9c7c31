//! Generated summary output

use chrono::{DateTime, Local};
use serde::Serialize;

/// The result of one "Generate" action.
///
/// Derived from the field list, never stored in it. Held until the next
/// generation overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedOutput {
    /// Form title at the time of generation
    pub title: String,
    /// Formatted `Label: Value` lines joined by `\n`
    pub content: String,
    /// When the output was generated
    pub timestamp: DateTime<Local>,
}

impl GeneratedOutput {
    /// Pair content with the current title and capture time
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Number of summary lines
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Time of generation formatted for display
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
