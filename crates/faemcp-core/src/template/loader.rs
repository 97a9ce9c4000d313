//! Template loading and variable discovery

use serde::Serialize;
use tracing::debug;

use super::error::TemplateError;
use super::scan::PlaceholderScan;
use super::substitute::{substitute, Bindings};
use crate::resource::ResourceProvider;

/// A declared template variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub description: String,
}

/// A loaded template: raw text plus the variables it declares
///
/// Immutable once built; share it behind an `Arc` across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    path: String,
    text: String,
    variables: Vec<Variable>,
}

impl Template {
    /// Build a template from text already in memory
    ///
    /// `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Malformed`] if `text` declares no placeholders.
    pub fn parse(path: impl Into<String>, text: impl Into<String>) -> Result<Self, TemplateError> {
        let path = path.into();
        let text = text.into();
        let variables = collect_variables(&text);

        if variables.is_empty() {
            return Err(TemplateError::Malformed { path });
        }

        Ok(Self {
            path,
            text,
            variables,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Declared variables in order of first appearance
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.description.as_str())
    }

    /// Fill this template with `bindings`
    pub fn render(&self, bindings: &Bindings) -> Result<String, TemplateError> {
        substitute(&self.text, bindings)
    }
}

/// Collapse placeholders into one entry per name
///
/// A repeated name keeps the position of its first occurrence and the
/// description of its last one.
fn collect_variables(text: &str) -> Vec<Variable> {
    let mut variables: Vec<Variable> = Vec::new();

    for placeholder in PlaceholderScan::new(text) {
        match variables.iter_mut().find(|v| v.name == placeholder.name) {
            Some(existing) => existing.description = placeholder.description.to_string(),
            None => variables.push(Variable {
                name: placeholder.name.to_string(),
                description: placeholder.description.to_string(),
            }),
        }
    }

    variables
}

/// Load the template at `path` from `provider`
///
/// # Errors
///
/// - [`TemplateError::NotFound`] if the provider has no such resource
/// - [`TemplateError::Unreadable`] if the resource exists but cannot be read
/// - [`TemplateError::Malformed`] if the template declares no placeholders
pub fn load(provider: &dyn ResourceProvider, path: &str) -> Result<Template, TemplateError> {
    let text = provider
        .read(path)
        .map_err(|e| TemplateError::Unreadable {
            path: path.to_string(),
            reason: e.to_string(),
        })?
        .ok_or_else(|| TemplateError::NotFound {
            path: path.to_string(),
        })?;

    let template = Template::parse(path, text)?;
    debug!(
        path,
        source = %provider.describe(),
        variables = template.variables.len(),
        "loaded template"
    );
    Ok(template)
}
