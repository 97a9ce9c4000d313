//! Render command - print the filled-in template

use crate::cli::Cli;
use crate::context::Context;
use anyhow::Result;
use faemcp_core::Bindings;
use std::io::{self, Write};

pub fn run(cli: &Cli, set: Vec<(String, String)>) -> Result<()> {
    let ctx = Context::new(cli)?;
    let service = ctx.service()?;

    // Later --set flags win
    let bindings: Bindings = set.into_iter().collect();
    let text = service.render(&bindings)?;

    // Written as-is so the output matches the template byte for byte
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
