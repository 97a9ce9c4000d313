//! Template resource providers
//!
//! A provider resolves a relative resource path (e.g. `start-prompt.md`) to
//! its text. Absence is `Ok(None)`, not an error: the loader turns it into
//! [`TemplateError::NotFound`](crate::template::TemplateError::NotFound).

mod dir;
mod embedded;
mod layered;

pub use dir::DirResources;
pub use embedded::{EmbeddedResources, DEFAULT_TEMPLATE};
pub use layered::LayeredResources;

use std::io;

/// Read-only source of template text
pub trait ResourceProvider: Send + Sync {
    /// Read the resource at `path`
    ///
    /// Returns `Ok(None)` when no such resource exists.
    fn read(&self, path: &str) -> io::Result<Option<String>>;

    /// Names of all resources this provider can serve, sorted
    fn list(&self) -> io::Result<Vec<String>>;

    /// Short human-readable origin, used in logs
    fn describe(&self) -> String;
}
