//! Templates command - list templates the configured provider can load

use crate::cli::Cli;
use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TemplatesOutput {
    source: String,
    config: Option<String>,
    selected: String,
    templates: Vec<String>,
}

pub fn run(cli: &Cli, json: bool) -> Result<()> {
    let ctx = Context::new(cli)?;
    let provider = ctx.provider();
    let templates = provider.list().context("Failed to list templates")?;

    let output = TemplatesOutput {
        source: provider.describe(),
        config: ctx.config_path.as_ref().map(|p| p.display().to_string()),
        selected: ctx.config.template.name.clone(),
        templates,
    };

    if json {
        return print_json(&output);
    }

    print_text(&format!("Templates from {}", output.source))?;
    if let Some(config) = &output.config {
        print_text(&format!("Config: {}", config))?;
    }
    for name in &output.templates {
        if *name == output.selected {
            print_text(&format!("* {}", name.green().bold()))?;
        } else {
            print_text(&format!("  {}", name))?;
        }
    }
    Ok(())
}
