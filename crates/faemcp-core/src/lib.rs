// Core modules
pub mod collector;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod resource;
pub mod service;
pub mod template;
pub mod version;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use service::PromptService;
pub use template::{load, substitute, Bindings, Template, TemplateError, Variable};
