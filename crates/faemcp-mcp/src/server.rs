use crate::context::McpContext;
use crate::handlers::template::TemplateTool;
use faemcp_core::config::consts::mcp::{RENDER_TOOL, START_PROMPT};
use faemcp_core::version::VersionInfo;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::router::{prompt::PromptRouter, tool::ToolRouter},
    model::*,
    service::RequestContext,
    prompt, prompt_handler, prompt_router, tool_handler,
};
use tracing::{error, info};

/// Diagnostic title for errors that take the whole server down
pub const SERVER_ERROR_TITLE: &str = "MCP Server Error";

#[derive(Clone)]
pub struct FaemcpServer {
    pub context: McpContext,
    pub tool_router: ToolRouter<FaemcpServer>,
    pub prompt_router: PromptRouter<FaemcpServer>,
}

impl FaemcpServer {
    pub fn new(context: McpContext) -> Self {
        let tool_router = TemplateTool::into_router(context.service.template());
        Self {
            context,
            tool_router,
            prompt_router: Self::prompt_router(),
        }
    }

    /// Serve on stdin/stdout until the client disconnects
    ///
    /// Errors are reported to the diagnostic sink before being returned.
    pub async fn run_stdio_server(context: McpContext) -> anyhow::Result<()> {
        let service = context.service.clone();
        Self::serve_stdio(context).await.inspect_err(|e| {
            error!(error = %e, "server stopped");
            service.report(SERVER_ERROR_TITLE, e.as_ref());
        })
    }

    async fn serve_stdio(context: McpContext) -> anyhow::Result<()> {
        let server = Self::new(context);
        info!(
            template = server.context.service.template().path(),
            "{}",
            startup_message()
        );
        let running = server.serve(rmcp::transport::stdio()).await?;
        let reason = running.waiting().await?;
        info!(?reason, "MCP server stopped");
        Ok(())
    }
}

/// First log line of a serving process, naming version and commit
fn startup_message() -> String {
    format!("Starting {} MCP server on stdio", VersionInfo::current())
}

#[prompt_router]
impl FaemcpServer {
    // Attribute arguments must be literals; kept equal to START_PROMPT
    #[prompt(
        name = "start",
        description = "Interview the user for the start prompt, then fill it in with start_template"
    )]
    async fn start(&self) -> Result<Vec<PromptMessage>, McpError> {
        Ok(vec![PromptMessage::new_text(
            PromptMessageRole::User,
            self.context.service.instructions(RENDER_TOOL),
        )])
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for FaemcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "faemcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "Use the `{}` prompt to interview the user, then call `{}` with their answers to get the finished prompt.",
                START_PROMPT, RENDER_TOOL
            )),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faemcp_core::diagnostics::NullSink;
    use faemcp_core::{PromptService, Template, collector::QuestionnaireCollector};
    use std::sync::Arc;

    fn server() -> FaemcpServer {
        let template = Template::parse("t.md", "{{a:first}} {{b:second}}").unwrap();
        let service =
            PromptService::new(template, Arc::new(NullSink), Arc::new(QuestionnaireCollector));
        FaemcpServer::new(McpContext::new(service))
    }

    #[test]
    fn test_get_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "faemcp");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        let instructions = info.instructions.unwrap();
        assert!(instructions.contains(RENDER_TOOL));
        assert!(instructions.contains(START_PROMPT));
    }

    #[test]
    fn test_prompt_is_registered_under_start_prompt_name() {
        let prompts = server().prompt_router.list_all();
        let names: Vec<&str> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec![START_PROMPT]);
    }

    #[test]
    fn test_startup_message_names_version_and_commit() {
        let info = VersionInfo::current();
        let message = startup_message();
        assert!(message.starts_with(&format!("Starting faemcp {} (git: ", info.version)));
        assert!(message.contains(&info.git_hash));
    }

    #[tokio::test]
    async fn test_start_prompt_lists_variables() {
        let messages = server().start().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, PromptMessageRole::User);
        let PromptMessageContent::Text { text } = &messages[0].content else {
            panic!("expected text content");
        };
        assert!(text.contains("**a**: first"));
        assert!(text.contains("**b**: second"));
        assert!(text.contains(RENDER_TOOL));
    }
}
