//! The caller-facing prompt operation
//!
//! [`PromptService`] owns one loaded template plus the injected capabilities
//! (diagnostic sink, parameter collector). Hosts build it once at startup and
//! share it; each request only supplies its own bindings.

use std::sync::Arc;

use tracing::{debug, info};

use crate::collector::ParameterCollector;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::resource::ResourceProvider;
use crate::template::{self, Bindings, Template, TemplateError};

#[derive(Clone)]
pub struct PromptService {
    template: Arc<Template>,
    sink: Arc<dyn DiagnosticSink>,
    collector: Arc<dyn ParameterCollector>,
}

impl PromptService {
    /// Wrap an already loaded template
    pub fn new(
        template: Template,
        sink: Arc<dyn DiagnosticSink>,
        collector: Arc<dyn ParameterCollector>,
    ) -> Self {
        Self {
            template: Arc::new(template),
            sink,
            collector,
        }
    }

    /// Load `path` from `provider` and build the service
    ///
    /// Load failures are reported to `sink` before being returned unchanged.
    pub fn load(
        provider: &dyn ResourceProvider,
        path: &str,
        sink: Arc<dyn DiagnosticSink>,
        collector: Arc<dyn ParameterCollector>,
    ) -> Result<Self, TemplateError> {
        match template::load(provider, path) {
            Ok(template) => {
                info!(
                    path,
                    source = %provider.describe(),
                    variables = ?template.variables().iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
                    "template ready"
                );
                Ok(Self::new(template, sink, collector))
            }
            Err(e) => {
                sink.report(&Diagnostic::from_error(e.title(), &e));
                Err(e)
            }
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Fill the template with `bindings`
    ///
    /// Either the whole text comes back or an error does; a missing binding
    /// is also reported to the diagnostic sink.
    pub fn render(&self, bindings: &Bindings) -> Result<String, TemplateError> {
        debug!(bound = bindings.len(), "rendering template");
        self.template.render(bindings).inspect_err(|e| {
            self.sink.report(&Diagnostic::from_error(e.title(), e));
        })
    }

    /// Instructions for collecting the template's variables before calling `tool_name`
    pub fn instructions(&self, tool_name: &str) -> String {
        self.collector.instructions(&self.template, tool_name)
    }

    /// Forward an error raised outside the template engine to the sink
    pub fn report(&self, title: &str, error: &(dyn std::error::Error + 'static)) {
        self.sink.report(&Diagnostic::from_error(title, error));
    }
}

impl std::fmt::Debug for PromptService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptService")
            .field("template", &self.template.path())
            .finish_non_exhaustive()
    }
}
