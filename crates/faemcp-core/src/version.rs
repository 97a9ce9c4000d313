//! Version information including the git commit

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Used when the commit cannot be determined
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
    pub git_hash: String,
}

impl VersionInfo {
    /// Version of this build
    ///
    /// The commit comes from `FAEMCP_GIT_HASH` at compile time when set,
    /// otherwise from `git rev-parse` in the source checkout.
    pub fn current() -> Self {
        let git_hash = option_env!("FAEMCP_GIT_HASH")
            .map(str::to_string)
            .unwrap_or_else(|| git_hash(Path::new(env!("CARGO_MANIFEST_DIR"))));

        Self {
            name: "faemcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_hash,
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (git: {})", self.name, self.version, self.git_hash)
    }
}

/// Short (8 character) hash of `HEAD` in `dir`, or [`UNKNOWN`]
pub fn git_hash(dir: &Path) -> String {
    let output = match Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(dir)
        .output()
    {
        Ok(output) if output.status.success() => output,
        _ => return UNKNOWN.to_string(),
    };

    parse_git_hash(&String::from_utf8_lossy(&output.stdout)).unwrap_or_else(|| UNKNOWN.to_string())
}

fn parse_git_hash(stdout: &str) -> Option<String> {
    let hash = stdout.trim();
    if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(hash.chars().take(8).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_git_hash_shortens() {
        assert_eq!(
            parse_git_hash("0123456789abcdef0123456789abcdef01234567\n"),
            Some("01234567".to_string())
        );
    }

    #[test]
    fn test_parse_git_hash_rejects_garbage() {
        assert_eq!(parse_git_hash(""), None);
        assert_eq!(parse_git_hash("fatal: not a git repository"), None);
    }

    #[test]
    fn test_git_hash_outside_repo_is_unknown() {
        let dir = std::env::temp_dir().join("faemcp-no-such-dir-for-git");
        assert_eq!(git_hash(&dir), UNKNOWN);
    }

    #[test]
    fn test_display() {
        let info = VersionInfo {
            name: "faemcp".to_string(),
            version: "0.1.0".to_string(),
            git_hash: "abcd1234".to_string(),
        };
        assert_eq!(info.to_string(), "faemcp 0.1.0 (git: abcd1234)");
    }
}
