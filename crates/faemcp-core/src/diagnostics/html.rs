//! Local HTML error pages

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use super::{Diagnostic, DiagnosticSink, LogSink};

/// Shows a written error page to the user
pub type PageOpener = Arc<dyn Fn(&Path) -> io::Result<()> + Send + Sync>;

/// Writes each diagnostic as a standalone HTML page into a directory
///
/// The page location is logged as a `file://` URL and, unless disabled,
/// opened in the default browser. Diagnostics are also forwarded to
/// [`LogSink`], so nothing is lost when the page cannot be written or shown.
#[derive(Clone)]
pub struct HtmlPageSink {
    dir: PathBuf,
    opener: Option<PageOpener>,
}

impl HtmlPageSink {
    /// Sink that opens every page in the default browser
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let opener: PageOpener = Arc::new(open_in_browser);
        Self {
            dir: dir.into(),
            opener: Some(opener),
        }
    }

    /// Only write pages; never launch anything
    pub fn without_browser(mut self) -> Self {
        self.opener = None;
        self
    }

    pub fn with_opener(mut self, opener: PageOpener) -> Self {
        self.opener = Some(opener);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write_page(&self, diagnostic: &Diagnostic) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let mut file = tempfile::Builder::new()
            .prefix("faemcp-error-")
            .suffix(".html")
            .tempfile_in(&self.dir)?;
        file.write_all(render_page(diagnostic).as_bytes())?;
        let (_, path) = file.keep().map_err(|e| e.error)?;
        Ok(path)
    }
}

impl DiagnosticSink for HtmlPageSink {
    fn report(&self, diagnostic: &Diagnostic) {
        LogSink.report(diagnostic);

        let path = match self.write_page(diagnostic) {
            Ok(path) => path,
            Err(e) => {
                warn!(
                    dir = %self.dir.display(),
                    "Failed to write error page: {}", e
                );
                return;
            }
        };
        warn!("Error page written to file://{}", path.display());

        if let Some(opener) = &self.opener {
            match opener(&path) {
                Ok(()) => debug!(path = %path.display(), "opened error page"),
                Err(e) => warn!(
                    "Failed to open browser: {}. Please open file://{} manually.",
                    e,
                    path.display()
                ),
            }
        }
    }
}

impl fmt::Debug for HtmlPageSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlPageSink")
            .field("dir", &self.dir)
            .field("opens_browser", &self.opener.is_some())
            .finish()
    }
}

fn open_in_browser(path: &Path) -> io::Result<()> {
    open::that(path)
}

/// Render `diagnostic` as a self-contained HTML document
pub fn render_page(diagnostic: &Diagnostic) -> String {
    let title = escape_html(&diagnostic.title);
    let message = escape_html(&diagnostic.message);
    let causes = if diagnostic.chain.is_empty() {
        "(no underlying cause)".to_string()
    } else {
        diagnostic
            .chain
            .iter()
            .enumerate()
            .map(|(i, cause)| format!("{}: {}", i + 1, escape_html(cause)))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let timestamp = diagnostic.timestamp.format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>faemcp Error - {title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 1200px; margin: 0 auto; padding: 20px; background: #f5f5f5; color: #333; }}
.container {{ background: white; border-radius: 8px; padding: 30px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
.header {{ border-bottom: 3px solid #e74c3c; padding-bottom: 20px; margin-bottom: 30px; }}
.error-type {{ color: #e74c3c; font-size: 24px; font-weight: bold; margin: 0; }}
.error-message {{ font-size: 18px; margin: 10px 0; color: #555; }}
.causes {{ background: #2c3e50; color: #ecf0f1; padding: 20px; border-radius: 5px; font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace; font-size: 14px; white-space: pre-wrap; }}
.suggestion {{ background: #f39c12; color: white; padding: 15px; border-radius: 5px; margin: 20px 0; }}
.timestamp {{ color: #95a5a6; font-size: 14px; margin-top: 20px; }}
</style>
</head>
<body>
<div class="container">
<div class="header">
<h1 class="error-type">{title}</h1>
<p class="error-message">{message}</p>
</div>
<h3>Caused by</h3>
<div class="causes">{causes}</div>
<div class="suggestion">
<strong>Next steps:</strong><br>
1. Check the error message above<br>
2. Verify your template files and configuration<br>
3. Check the repository for known issues
</div>
<div class="timestamp">Generated at: {timestamp}</div>
</div>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
