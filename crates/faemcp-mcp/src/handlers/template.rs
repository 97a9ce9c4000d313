use crate::errors;
use crate::handlers::{Safety, ToolExt};
use crate::server::FaemcpServer;
use faemcp_core::config::consts::mcp::RENDER_TOOL;
use faemcp_core::{Bindings, Template};
use futures_util::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::common::FromContextPart,
    handler::server::router::tool::{ToolRoute, ToolRouter},
    handler::server::wrapper::Parameters,
    model::*,
    schemars, serde,
};
use serde_json::{Map, Value, json};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

/// Values for the template's variables, keyed by variable name
#[derive(Debug, Clone, Default, serde::Deserialize, schemars::JsonSchema)]
#[serde(transparent)]
pub struct StartTemplateArgs {
    pub variables: Bindings,
}

pub struct TemplateTool;

impl TemplateTool {
    pub fn into_router(template: &Template) -> ToolRouter<FaemcpServer> {
        ToolRouter::new().with_route(ToolRoute::new_dyn(
            Self::start_template_attr(template),
            |mut ctx| {
                let server = ctx.service;
                let args_res = Parameters::<StartTemplateArgs>::from_context_part(&mut ctx);
                async move {
                    let Parameters(args) = args_res?;
                    Self::start_template(server, args).await
                }
                .boxed()
            },
        ))
    }

    fn start_template_attr(template: &Template) -> Tool {
        Tool::new(
            Cow::Borrowed(RENDER_TOOL),
            "Fill in the start prompt template with the user's answers and return the finished prompt",
            input_schema(template),
        )
        .with_safety(Safety {
            network: false,
            reads: true,
            writes: false,
        })
    }

    pub async fn start_template(
        server: &FaemcpServer,
        args: StartTemplateArgs,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            names = ?args.variables.keys().collect::<Vec<_>>(),
            "start_template called"
        );
        let text = server
            .context
            .service
            .render(&args.variables)
            .map_err(errors::from_template_error)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

/// Object schema with one required string property per template variable
fn input_schema(template: &Template) -> Arc<JsonObject> {
    let base = rmcp::handler::server::common::schema_for_type::<StartTemplateArgs>();
    let mut schema = (*base).clone();

    let mut properties = Map::new();
    let mut required = Vec::new();
    for variable in template.variables() {
        properties.insert(
            variable.name.clone(),
            json!({
                "type": "string",
                "description": variable.description,
            }),
        );
        required.push(Value::String(variable.name.clone()));
    }

    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), Value::Array(required));
    Arc::new(schema)
}
