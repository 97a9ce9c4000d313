use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::diagnostics::DiagnosticsMode;
use crate::resource::DEFAULT_TEMPLATE;

/// faemcp.toml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Resource path of the template to serve
    #[serde(default = "default_template_name")]
    pub name: String,
    /// Directory searched before the embedded templates
    #[serde(default)]
    pub resource_root: Option<PathBuf>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            name: default_template_name(),
            resource_root: None,
        }
    }
}

fn default_template_name() -> String {
    DEFAULT_TEMPLATE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub mode: DiagnosticsMode,
    /// Where HTML error pages are written (system temp dir if unset)
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Open each HTML error page in the default browser
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            mode: DiagnosticsMode::default(),
            dir: None,
            open_browser: default_open_browser(),
        }
    }
}

fn default_open_browser() -> bool {
    true
}
