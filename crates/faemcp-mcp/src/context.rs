use faemcp_core::PromptService;

/// Everything a request handler needs, built once at startup
#[derive(Clone, Debug)]
pub struct McpContext {
    pub service: PromptService,
}

impl McpContext {
    pub fn new(service: PromptService) -> Self {
        Self { service }
    }
}
