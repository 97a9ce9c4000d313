//! Configuration loading
//!
//! Lookup order for the config file:
//! 1. an explicit path (`--config` / `FAEMCP_CONFIG`)
//! 2. `./faemcp.toml`
//! 3. `<platform config dir>/faemcp/faemcp.toml`
//!
//! With no file found, defaults apply: the embedded `start-prompt.md` and
//! diagnostics logged through `tracing`.

pub mod consts;
mod model;

pub use model::{Config, DiagnosticsConfig, TemplateConfig};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::diagnostics::{self, DiagnosticSink};
use crate::error::{CoreError, Result};
use crate::resource::{DirResources, EmbeddedResources, LayeredResources, ResourceProvider};
use consts::{APP_DIR_NAME, CONFIG_FILE_NAME};

impl Config {
    /// Parse `path`, resolving relative directories against the file's location
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// empty template.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&text).map_err(|e| CoreError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.template.resource_root = config
            .template
            .resource_root
            .map(|root| absolutize(base, root));
        config.diagnostics.dir = config.diagnostics.dir.map(|dir| absolutize(base, dir));

        config.validate()?;
        Ok(config)
    }

    /// Find and load the config file, or fall back to defaults
    ///
    /// Returns the config together with the file it came from.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        let candidates = [
            Some(PathBuf::from(CONFIG_FILE_NAME)),
            dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
        ];
        for candidate in candidates.into_iter().flatten() {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "using config file");
                return Ok((Self::from_file(&candidate)?, Some(candidate)));
            }
        }

        debug!("no config file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.template.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalidValue {
                field: "template.name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Provider for the configured template sources
    pub fn resource_provider(&self) -> Box<dyn ResourceProvider> {
        match &self.template.resource_root {
            Some(root) => Box::new(LayeredResources::new(DirResources::new(root.clone()))),
            None => Box::new(EmbeddedResources),
        }
    }

    /// Sink for the configured diagnostics mode
    pub fn diagnostic_sink(&self) -> Arc<dyn DiagnosticSink> {
        diagnostics::sink_for(
            self.diagnostics.mode,
            self.diagnostics.dir.clone(),
            self.diagnostics.open_browser,
        )
    }
}

fn absolutize(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
