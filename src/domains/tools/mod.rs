//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder wiring tools to their dependencies
//!
//! Every expected failure (missing argument, unknown tool, city not found)
//! is reported as a successful protocol response whose single text block
//! carries the error message; only internal storage/network failures become
//! protocol-level faults.

pub mod definitions;
pub mod router;

pub use router::build_tool_router;
