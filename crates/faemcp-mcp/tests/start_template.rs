//! Behaviour of the start_template tool and its error codes

use faemcp_core::collector::QuestionnaireCollector;
use faemcp_core::diagnostics::MemorySink;
use faemcp_core::{Bindings, PromptService, Template};
use faemcp_mcp::context::McpContext;
use faemcp_mcp::handlers::template::{StartTemplateArgs, TemplateTool};
use faemcp_mcp::rmcp::model::RawContent;
use faemcp_mcp::server::FaemcpServer;
use faemcp_testkit::SAMPLE_TEMPLATE;
use std::sync::Arc;

fn get_error_code(err: &rmcp::ErrorData) -> Option<String> {
    err.data
        .as_ref()
        .and_then(|v| v.get("code"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
}

fn setup(text: &str) -> (FaemcpServer, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let template = Template::parse("sample.md", text).unwrap();
    let service = PromptService::new(template, sink.clone(), Arc::new(QuestionnaireCollector));
    (FaemcpServer::new(McpContext::new(service)), sink)
}

fn args(pairs: &[(&str, &str)]) -> StartTemplateArgs {
    StartTemplateArgs {
        variables: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Bindings>(),
    }
}

fn first_text(result: &rmcp::model::CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {other:?}"),
    }
}

#[tokio::test]
async fn test_renders_all_variables() {
    let (server, sink) = setup(SAMPLE_TEMPLATE);

    let result = TemplateTool::start_template(
        &server,
        args(&[
            ("context", "A Rust workspace"),
            ("goals", "Correctness first"),
            ("query", "Review the parser"),
        ]),
    )
    .await
    .unwrap();

    assert_eq!(result.is_error, Some(false));
    assert_eq!(result.content.len(), 1);
    assert_eq!(
        first_text(&result),
        "# Brief\n\nA Rust workspace\n\nCorrectness first\n\nReview the parser\n"
    );
    assert!(sink.reports().is_empty());
}

#[tokio::test]
async fn test_missing_variable_returns_missing_variable_code() {
    let (server, sink) = setup(SAMPLE_TEMPLATE);

    let res = TemplateTool::start_template(
        &server,
        args(&[("context", "c"), ("query", "q")]),
    )
    .await;

    let err = res.unwrap_err();
    assert_eq!(get_error_code(&err).as_deref(), Some("MISSING_VARIABLE"));
    assert_eq!(err.data.as_ref().unwrap()["details"]["variable"], "goals");
    assert!(err.message.contains("goals"));

    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].title, "Template Variable Missing");
}

#[tokio::test]
async fn test_empty_arguments_fail_on_first_variable() {
    let (server, _sink) = setup(SAMPLE_TEMPLATE);

    let err = TemplateTool::start_template(&server, StartTemplateArgs::default())
        .await
        .unwrap_err();

    assert_eq!(err.data.as_ref().unwrap()["details"]["variable"], "context");
    assert_eq!(err.data.as_ref().unwrap()["details"]["line"], 3);
}

#[tokio::test]
async fn test_extra_arguments_are_ignored() {
    let (server, _sink) = setup("Hello {{who:Name}}");

    let result = TemplateTool::start_template(&server, args(&[("who", "Ada"), ("unused", "x")]))
        .await
        .unwrap();

    assert_eq!(first_text(&result), "Hello Ada");
}

#[tokio::test]
async fn test_values_are_inserted_verbatim() {
    let (server, _sink) = setup("[{{a:x}}]");

    let result = TemplateTool::start_template(&server, args(&[("a", "{{b:not a placeholder}}")]))
        .await
        .unwrap();

    assert_eq!(first_text(&result), "[{{b:not a placeholder}}]");
}

#[tokio::test]
async fn test_concurrent_calls_share_one_template() {
    let (server, _sink) = setup("{{n:number}}");
    let server = Arc::new(server);

    let mut handles = Vec::new();
    for i in 0..8 {
        let server = server.clone();
        handles.push(tokio::spawn(async move {
            let value = i.to_string();
            let result = TemplateTool::start_template(&server, args(&[("n", value.as_str())]))
                .await
                .unwrap();
            assert_eq!(first_text(&result), value);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
}
