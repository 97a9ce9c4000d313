//! Variable substitution

use std::collections::BTreeMap;

use super::error::TemplateError;
use super::scan::PlaceholderScan;

/// Caller-supplied values, keyed by variable name
pub type Bindings = BTreeMap<String, String>;

/// Replace every placeholder in `text` with its bound value
///
/// Single left-to-right pass. Values are inserted verbatim and never
/// re-scanned, so a value containing `{{x:y}}` comes out unchanged.
/// Descriptions are ignored.
///
/// # Errors
///
/// Returns [`TemplateError::MissingVariable`] for the first placeholder whose
/// name has no binding. No partial output is produced.
pub fn substitute(text: &str, bindings: &Bindings) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;

    for placeholder in PlaceholderScan::new(text) {
        let value = bindings
            .get(placeholder.name)
            .ok_or_else(|| TemplateError::MissingVariable {
                name: placeholder.name.to_string(),
                line: placeholder.line,
            })?;

        output.push_str(&text[copied..placeholder.start]);
        output.push_str(value);
        copied = placeholder.end();
    }

    output.push_str(&text[copied..]);
    Ok(output)
}
