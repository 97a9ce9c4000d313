//! Vars command - list the template's variables

use crate::cli::Cli;
use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use faemcp_core::Variable;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct VarsOutput<'a> {
    template: &'a str,
    variables: &'a [Variable],
}

pub fn run(cli: &Cli, json: bool) -> Result<()> {
    let ctx = Context::new(cli)?;
    let service = ctx.service()?;
    let template = service.template();

    if json {
        return print_json(&VarsOutput {
            template: template.path(),
            variables: template.variables(),
        });
    }

    print_text(&format!("{}", template.path().bold()))?;
    for variable in template.variables() {
        print_text(&format!(
            "  {}: {}",
            variable.name.cyan(),
            variable.description
        ))?;
    }
    Ok(())
}
