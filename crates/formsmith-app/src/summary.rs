//! Summary generation: fields → `Label: Value` lines

use formsmith_core::prelude::*;
use formsmith_core::field::trim_text;
use formsmith_core::{Field, GeneratedOutput};

/// Label used when a kept field has an empty label
pub const UNTITLED_LABEL: &str = "Untitled";

/// Value used when a kept field has an empty value
pub const EMPTY_VALUE: &str = "N/A";

/// Message carried by the validation error when nothing can be generated
pub const NO_FIELDS_MESSAGE: &str = "at least one field required";

/// Format one field as a summary line
pub fn format_line(field: &Field) -> String {
    let label = trim_text(&field.label);
    let value = trim_text(&field.value);
    format!(
        "{}: {}",
        if label.is_empty() { UNTITLED_LABEL } else { label },
        if value.is_empty() { EMPTY_VALUE } else { value }
    )
}

/// Build the summary text for `fields`.
///
/// Fields blank in both label and value are dropped. Fails with
/// [`Error::Validation`] when no field remains.
pub fn generate(fields: &[Field]) -> Result<String> {
    let lines: Vec<String> = fields
        .iter()
        .filter(|f| !f.is_blank())
        .map(format_line)
        .collect();

    if lines.is_empty() {
        return Err(Error::validation(NO_FIELDS_MESSAGE));
    }

    debug!(
        "Generated summary from {} of {} fields",
        lines.len(),
        fields.len()
    );
    Ok(lines.join("\n"))
}

/// Generate and pair the content with `title` and the current time
pub fn generate_output(title: &str, fields: &[Field]) -> Result<GeneratedOutput> {
    generate(fields).map(|content| GeneratedOutput::new(title, content))
}
