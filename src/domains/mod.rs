//! Domain modules organized by bounded context.
//!
//! - **notes**: JSON-file-backed note storage
//! - **weather**: Open-Meteo geocoding + forecast client
//! - **tools**: MCP tool definitions and routing

pub mod notes;
pub mod tools;
pub mod weather;
