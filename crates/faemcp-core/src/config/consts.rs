//! Names and defaults shared across the workspace

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "faemcp.toml";

/// Directory under the platform config dir holding the user-level config
pub const APP_DIR_NAME: &str = "faemcp";

/// MCP surface names
pub mod mcp {
    /// Tool that renders the template
    pub const RENDER_TOOL: &str = "start_template";

    /// Prompt that asks the user for the template's variables
    pub const START_PROMPT: &str = "start";
}
