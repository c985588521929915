//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the router built in
//! `domains/tools/router.rs`.
//!
//! `ServerHandler` is implemented by hand rather than through the
//! `#[tool_handler]` macro: the macro's fallback raises a protocol fault
//! for unknown tool names, while this server's contract is to answer them
//! with a successful response carrying `Error: Unknown tool '<name>'`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::notes::NoteStore;
use crate::domains::tools::build_tool_router;
use crate::domains::weather::WeatherClient;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the notes and weather domains.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let store = Arc::new(NoteStore::new(config.storage.notes_file.clone()));
        let weather = Arc::new(WeatherClient::new(config.weather.clone())?);

        Ok(Self {
            tool_router: build_tool_router(store, weather),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// Successful response carrying the unknown-tool error text.
fn unknown_tool_result(name: &str) -> CallToolResult {
    CallToolResult::success(vec![Content::text(format!(
        "Error: Unknown tool '{name}'"
    ))])
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Weather and notes server. Provides current weather lookup via \
                 Open-Meteo and simple note storage in a local JSON file."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            ..Default::default()
        })
    }

    #[instrument(skip(self, context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Tool call: {}", request.name);

        if !self.tool_router.has_route(request.name.as_ref()) {
            return Ok(unknown_tool_result(&request.name));
        }

        let ctx = ToolCallContext::new(self, request, context);
        self.tool_router.call(ctx).await
    }
}
