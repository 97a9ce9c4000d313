//! Error reporting side channel
//!
//! A [`DiagnosticSink`] receives a copy of every error the prompt service
//! raises. Sinks observe; they never change what is returned to the caller,
//! and a sink that fails must swallow its own failure.

mod html;

pub use html::HtmlPageSink;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::{Arc, Mutex};
use tracing::error;

/// One reported error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Short heading, e.g. "Template Variable Missing"
    pub title: String,
    /// Top-level error message
    pub message: String,
    /// Messages of the error's `source()` chain, outermost first
    pub chain: Vec<String>,
    pub timestamp: DateTime<Local>,
}

impl Diagnostic {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            chain: Vec::new(),
            timestamp: Local::now(),
        }
    }

    /// Capture `error` together with its source chain
    pub fn from_error(title: impl Into<String>, error: &(dyn Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }

        Self {
            chain,
            ..Self::new(title, error.to_string())
        }
    }
}

/// Receiver of diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Emits diagnostics as `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        error!(
            title = %diagnostic.title,
            causes = ?diagnostic.chain,
            "{}",
            diagnostic.message
        );
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory, for embedding hosts and tests
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic.clone());
    }
}

/// How diagnostics are surfaced, as selected in configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    /// Log through `tracing`
    #[default]
    Log,
    /// Log and write an HTML error page
    Html,
    /// Report nothing
    Off,
}

impl std::str::FromStr for DiagnosticsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "html" => Ok(Self::Html),
            "off" => Ok(Self::Off),
            other => Err(format!(
                "unknown diagnostics mode '{}' (expected log, html or off)",
                other
            )),
        }
    }
}

/// Build the sink for `mode`
///
/// `page_dir` is where HTML pages go; the system temp dir when `None`.
/// With `open_browser` unset, pages are written but not shown.
pub fn sink_for(
    mode: DiagnosticsMode,
    page_dir: Option<std::path::PathBuf>,
    open_browser: bool,
) -> Arc<dyn DiagnosticSink> {
    match mode {
        DiagnosticsMode::Log => Arc::new(LogSink),
        DiagnosticsMode::Html => {
            let sink = HtmlPageSink::new(page_dir.unwrap_or_else(std::env::temp_dir));
            if open_browser {
                Arc::new(sink)
            } else {
                Arc::new(sink.without_browser())
            }
        }
        DiagnosticsMode::Off => Arc::new(NullSink),
    }
}
