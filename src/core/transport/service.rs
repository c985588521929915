//! Transport service - entry point for running the server's transport.

use tracing::info;

use super::TransportResult;
use super::stdio::StdioTransport;
use crate::core::McpServer;

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService;

impl TransportService {
    /// Create a new transport service.
    pub fn new() -> Self {
        Self
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: STDIO (standard MCP mode)");
        StdioTransport::run(server).await
    }
}

impl Default for TransportService {
    fn default() -> Self {
        Self::new()
    }
}
