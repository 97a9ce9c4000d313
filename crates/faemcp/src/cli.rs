//! CLI command structure using clap

use clap::{Parser, Subcommand};
use faemcp_core::diagnostics::DiagnosticsMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "faemcp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to use instead of the discovered one
    #[arg(long, global = true, env = "FAEMCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Template name, relative to the resource root
    #[arg(long, global = true, env = "FAEMCP_TEMPLATE")]
    pub template: Option<String>,

    /// Directory searched for templates before the bundled ones
    #[arg(long, global = true, env = "FAEMCP_RESOURCE_ROOT")]
    pub resource_root: Option<PathBuf>,

    /// Where errors are reported: log, html or off
    #[arg(long, global = true, env = "FAEMCP_DIAGNOSTICS")]
    pub diagnostics: Option<DiagnosticsMode>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Run the MCP server on stdio
    Serve,

    /// List the template's variables
    Vars {
        #[arg(long)]
        json: bool,
    },

    /// Print the template with variables filled in
    Render {
        /// Variable value, repeatable
        #[arg(long, value_name = "NAME=VALUE", value_parser = parse_binding)]
        set: Vec<(String, String)>,
    },

    /// List templates available from the resource root
    Templates {
        #[arg(long)]
        json: bool,
    },

    /// Show version and git commit
    Version {
        #[arg(long)]
        json: bool,
    },
}

fn parse_binding(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("variable name must not be empty".to_string());
    }
    Ok((name.to_string(), value.to_string()))
}
