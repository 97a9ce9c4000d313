//! Template error types

use std::fmt;

/// Template loading and substitution errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The named template resource does not exist
    NotFound {
        /// The path that was looked up
        path: String,
    },

    /// The resource exists but could not be read as UTF-8 text
    Unreadable {
        /// The path that was looked up
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// The template declares no `{{name:description}}` placeholders
    Malformed {
        /// The path of the offending template
        path: String,
    },

    /// Substitution referenced a name missing from the bindings
    MissingVariable {
        /// The variable that had no binding
        name: String,
        /// Line number of the placeholder
        line: usize,
    },
}

impl TemplateError {
    /// Stable machine-readable code, shared by the CLI and the MCP layer
    pub fn code(&self) -> &'static str {
        match self {
            TemplateError::NotFound { .. } => "TEMPLATE_NOT_FOUND",
            TemplateError::Unreadable { .. } => "TEMPLATE_UNREADABLE",
            TemplateError::Malformed { .. } => "TEMPLATE_MALFORMED",
            TemplateError::MissingVariable { .. } => "MISSING_VARIABLE",
        }
    }

    /// Heading used when the error is rendered as a diagnostic
    pub fn title(&self) -> &'static str {
        match self {
            TemplateError::NotFound { .. } => "Template File Missing",
            TemplateError::Unreadable { .. } => "Template File Unreadable",
            TemplateError::Malformed { .. } => "Template Configuration Error",
            TemplateError::MissingVariable { .. } => "Template Variable Missing",
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::NotFound { path } => {
                write!(f, "Template file not found: {}", path)
            }
            TemplateError::Unreadable { path, reason } => {
                write!(f, "Template file '{}' could not be read: {}", path, reason)
            }
            TemplateError::Malformed { path } => {
                write!(
                    f,
                    "No template variables found in {}. Declare at least one {{{{name:description}}}} placeholder.",
                    path
                )
            }
            TemplateError::MissingVariable { name, line } => {
                write!(f, "Missing required variable: {} (line {})", name, line)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
