//! Directory overrides with embedded fallback

use std::io;

use tracing::debug;

use super::{DirResources, EmbeddedResources, ResourceProvider};

/// Reads from a directory first and falls back to the bundled templates
///
/// Only absence falls through; a file that exists but cannot be read is an
/// error, so a broken override is never silently replaced by the default.
#[derive(Debug, Clone)]
pub struct LayeredResources {
    dir: DirResources,
    fallback: EmbeddedResources,
}

impl LayeredResources {
    pub fn new(dir: DirResources) -> Self {
        Self {
            dir,
            fallback: EmbeddedResources,
        }
    }
}

impl ResourceProvider for LayeredResources {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        if let Some(text) = self.dir.read(path)? {
            return Ok(Some(text));
        }
        debug!(path, root = %self.dir.describe(), "template not in directory, using embedded");
        self.fallback.read(path)
    }

    fn list(&self) -> io::Result<Vec<String>> {
        let mut names = self.dir.list()?;
        names.extend(self.fallback.list()?);
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn describe(&self) -> String {
        format!("{} (embedded fallback)", self.dir.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::DEFAULT_TEMPLATE;
    use faemcp_testkit::temp_dir_in_workspace;
    use std::fs;

    #[test]
    fn test_directory_overrides_embedded() {
        let temp = temp_dir_in_workspace();
        fs::write(temp.path().join(DEFAULT_TEMPLATE), "{{only:override}}").unwrap();

        let provider = LayeredResources::new(DirResources::new(temp.path()));
        assert_eq!(
            provider.read(DEFAULT_TEMPLATE).unwrap().as_deref(),
            Some("{{only:override}}")
        );
    }

    #[test]
    fn test_falls_back_to_embedded() {
        let temp = temp_dir_in_workspace();
        let provider = LayeredResources::new(DirResources::new(temp.path()));

        let text = provider.read(DEFAULT_TEMPLATE).unwrap().unwrap();
        assert!(text.contains("{{query:"));
    }

    #[test]
    fn test_unreadable_override_does_not_fall_back() {
        let temp = temp_dir_in_workspace();
        fs::write(temp.path().join(DEFAULT_TEMPLATE), [0xff, 0xfe]).unwrap();

        let provider = LayeredResources::new(DirResources::new(temp.path()));
        assert!(provider.read(DEFAULT_TEMPLATE).is_err());
    }

    #[test]
    fn test_list_merges_and_dedups() {
        let temp = temp_dir_in_workspace();
        fs::write(temp.path().join(DEFAULT_TEMPLATE), "").unwrap();
        fs::write(temp.path().join("review.md"), "").unwrap();

        let provider = LayeredResources::new(DirResources::new(temp.path()));
        assert_eq!(
            provider.list().unwrap(),
            vec!["review.md", DEFAULT_TEMPLATE]
        );
    }
}
