//! Global context for CLI commands

use crate::cli::Cli;
use anyhow::{Context as _, Result};
use faemcp_core::collector::QuestionnaireCollector;
use faemcp_core::config::Config;
use faemcp_core::resource::ResourceProvider;
use faemcp_core::PromptService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Effective configuration: the config file with CLI and env overrides applied
pub struct Context {
    pub config: Config,
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// # Errors
    ///
    /// Returns an error if a config file exists but is invalid, or an override
    /// leaves the template name empty.
    pub fn new(cli: &Cli) -> Result<Self> {
        let (mut config, config_path) =
            Config::discover(cli.config.as_deref()).context("Failed to load configuration")?;

        if let Some(name) = &cli.template {
            config.template.name = name.clone();
        }
        if let Some(root) = &cli.resource_root {
            config.template.resource_root = Some(root.clone());
        }
        if let Some(mode) = cli.diagnostics {
            config.diagnostics.mode = mode;
        }
        config.validate()?;

        debug!(?config, ?config_path, "effective configuration");
        Ok(Self {
            config,
            config_path,
        })
    }

    pub fn provider(&self) -> Box<dyn ResourceProvider> {
        self.config.resource_provider()
    }

    /// Load the configured template into a service
    pub fn service(&self) -> Result<PromptService> {
        let provider = self.provider();
        let service = PromptService::load(
            provider.as_ref(),
            &self.config.template.name,
            self.config.diagnostic_sink(),
            Arc::new(QuestionnaireCollector),
        )?;
        Ok(service)
    }
}
