//! Transport layer for the MCP server.
//!
//! Only the STDIO transport is provided: the server speaks MCP over
//! stdin/stdout to the client process that spawned it. The transport also
//! owns graceful shutdown: SIGINT/SIGTERM cancel the running service.

mod error;
mod service;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use service::TransportService;
