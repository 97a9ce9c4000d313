//! Template module - variable discovery and substitution
//!
//! A template is plain text (usually markdown) with placeholders that carry
//! both the variable name and a human-readable description of what the caller
//! should supply.
//!
//! ## Syntax
//!
//! - Placeholder: `{{name:description}}`
//! - `name` may not contain `:` or `}`; surrounding whitespace is trimmed
//! - `description` may not contain `}`, may span several lines, and is
//!   documentation only: substitution never looks at it
//!
//! Loading and substitution share one scanner ([`scan::PlaceholderScan`]), so
//! both always agree on what a placeholder is.

pub mod error;
mod loader;
pub(crate) mod scan;
mod substitute;

pub use error::TemplateError;
pub use loader::{load, Template, Variable};
pub use substitute::{substitute, Bindings};

#[cfg(test)]
mod tests;
