//! Serve command - MCP server over stdio

use crate::cli::Cli;
use crate::context::Context;
use anyhow::{Context as _, Result};
use faemcp_mcp::{FaemcpServer, McpContext};

pub fn run(cli: &Cli) -> Result<()> {
    let ctx = Context::new(cli)?;
    let service = ctx.service()?;

    // We need a tokio runtime for the server
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    rt.block_on(FaemcpServer::run_stdio_server(McpContext::new(service)))
}
