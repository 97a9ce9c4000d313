//! Templates compiled into the binary

use std::io;

use super::ResourceProvider;

/// Name of the template served when nothing else is configured
pub const DEFAULT_TEMPLATE: &str = "start-prompt.md";

const BUNDLED: &[(&str, &str)] = &[(
    DEFAULT_TEMPLATE,
    include_str!("../../prompts/start-prompt.md"),
)];

/// Provider backed by the bundled `prompts/` directory
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl ResourceProvider for EmbeddedResources {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        let path = path.strip_prefix("prompts/").unwrap_or(path);
        Ok(BUNDLED
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, text)| (*text).to_string()))
    }

    fn list(&self) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = BUNDLED.iter().map(|(name, _)| name.to_string()).collect();
        names.sort();
        Ok(names)
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}
