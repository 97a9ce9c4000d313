use faemcp_core::TemplateError;
use rmcp::ErrorData;
use serde_json::{Value, json};

/// Protocol error with `data.code` and `data.details` set
pub fn error_with_code(
    make: fn(String, Option<Value>) -> ErrorData,
    code: &str,
    message: impl Into<String>,
    details: Value,
) -> ErrorData {
    make(
        message.into(),
        Some(json!({
            "code": code,
            "details": details,
        })),
    )
}

/// Map a template error to a protocol error, keeping each kind distinguishable
pub fn from_template_error(error: TemplateError) -> ErrorData {
    let message = error.to_string();
    let code = error.code();
    match error {
        TemplateError::NotFound { path } => error_with_code(
            ErrorData::resource_not_found,
            code,
            message,
            json!({ "path": path }),
        ),
        TemplateError::Unreadable { path, reason } => error_with_code(
            ErrorData::internal_error,
            code,
            message,
            json!({ "path": path, "reason": reason }),
        ),
        TemplateError::Malformed { path } => error_with_code(
            ErrorData::internal_error,
            code,
            message,
            json!({ "path": path }),
        ),
        TemplateError::MissingVariable { name, line } => error_with_code(
            ErrorData::invalid_params,
            code,
            message,
            json!({ "variable": name, "line": line }),
        ),
    }
}
