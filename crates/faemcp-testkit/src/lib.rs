//! Test utilities for faemcp
//!
//! This crate provides shared testing utilities used across the faemcp workspace.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Cargo runs tests from the crate root, so every test's scratch files land
/// in one gitignored place that is easy to clean up by hand.
///
/// # Panics
///
/// Panics if the current directory is unknown or `.tmp/` cannot be created.
///
/// # Examples
///
/// ```rust
/// use faemcp_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write a template file under `root`, creating parent directories
///
/// Returns the full path of the written file.
pub fn write_template(root: &Path, name: &str, text: &str) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create template directory");
    }
    std::fs::write(&path, text).expect("Failed to write template");
    path
}

/// Write a `faemcp.toml` into `root` and return its path
pub fn write_config(root: &Path, toml: &str) -> PathBuf {
    let path = root.join("faemcp.toml");
    std::fs::write(&path, toml).expect("Failed to write config");
    path
}

/// The three-variable template used by most server and CLI tests
pub const SAMPLE_TEMPLATE: &str = "\
# Brief

{{context:What context should the model have?}}

{{goals:What goals matter most?}}

{{query:What is the first request?}}
";
