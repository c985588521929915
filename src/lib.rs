//! Weather/Notes MCP Server Library
//!
//! This crate provides a small Model Context Protocol (MCP) server exposing
//! three tools over a stdio transport:
//!
//! - `get_weather`: current weather for a city via the Open-Meteo API
//! - `save_note`: append a note to a local JSON file
//! - `get_notes`: list all saved notes
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **notes**: JSON-file-backed note storage
//!   - **weather**: Open-Meteo geocoding + forecast client
//!   - **tools**: MCP tool definitions and routing
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_notes_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
