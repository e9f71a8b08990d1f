use super::Dispatcher;
use crate::config::ServerConfig;
use crate::tools::catalog;
use devhelper_protocol::{CallRequest, ContentBlock};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use std::sync::Arc;
use tokio::sync::Mutex;

/// MCP front of the dispatcher. Tool calls run one at a time.
#[derive(Clone)]
pub struct DevHelperService {
    dispatcher: Arc<Dispatcher>,
    gate: Arc<Mutex<()>>,
}

impl DevHelperService {
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_dispatcher(Dispatcher::new(config))
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            gate: Arc::new(Mutex::new(())),
        }
    }

    fn tools() -> Vec<Tool> {
        catalog::capabilities()
            .iter()
            .map(|cap| {
                Tool::new(
                    cap.name.clone(),
                    cap.description.clone(),
                    Arc::new(cap.input_shape.to_json_schema()),
                )
            })
            .collect()
    }
}

impl ServerHandler for DevHelperService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "devhelper-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move { Ok(ListToolsResult::with_all_items(Self::tools())) }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            let call = CallRequest::new(request.name, request.arguments.unwrap_or_default());

            let _guard = self.gate.lock().await;
            let result = self.dispatcher.dispatch(call).await;

            // Failures travel in-band as text so the session keeps going.
            let content = result
                .into_content()
                .into_iter()
                .map(|block| match block {
                    ContentBlock::Text { text } => Content::text(text),
                })
                .collect();
            Ok(CallToolResult::success(content))
        }
    }
}
