//! Templates read from a directory on disk

use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::ResourceProvider;

/// Provider reading `<root>/<path>` from the filesystem
///
/// Paths are sandboxed to `root`: absolute paths, `..` components and
/// symlinks leading outside the root are rejected.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let requested = Path::new(path);

        // Component-based check so `/tmp` is rejected on Windows as well
        let escapes = requested.components().any(|c| {
            matches!(
                c,
                Component::RootDir | Component::Prefix(_) | Component::ParentDir
            )
        });
        if escapes || requested.is_absolute() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path '{}' must stay inside {}", path, self.root.display()),
            ));
        }

        let full_path = self.root.join(requested);

        if full_path.exists() {
            let canonical_target = full_path.canonicalize()?;
            let canonical_root = self.root.canonicalize()?;
            if !canonical_target.starts_with(&canonical_root) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("path '{}' resolves outside {}", path, self.root.display()),
                ));
            }
        }

        Ok(full_path)
    }
}

impl ResourceProvider for DirResources {
    fn read(&self, path: &str) -> io::Result<Option<String>> {
        let full_path = self.resolve(path)?;
        match std::fs::read_to_string(&full_path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn list(&self) -> io::Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(io::Error::other)?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                let name: Vec<_> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                names.push(name.join("/"));
            }
        }
        names.sort();
        Ok(names)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
