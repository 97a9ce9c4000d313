//! Version command - crate version and git commit

use crate::output::{print_json, print_text};
use anyhow::Result;
use faemcp_core::version::VersionInfo;

pub fn run(json: bool) -> Result<()> {
    let info = VersionInfo::current();
    if json {
        print_json(&info)
    } else {
        print_text(&info.to_string())?;
        Ok(())
    }
}
