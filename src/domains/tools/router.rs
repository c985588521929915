//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires the
//! fixed set of three tools to their dependencies. The set is closed at
//! compile time; the server's `call_tool` handles the unknown-name fallback.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::notes::NoteStore;
use crate::domains::weather::WeatherClient;

use super::definitions::{GetNotesTool, GetWeatherTool, SaveNoteTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(store: Arc<NoteStore>, weather: Arc<WeatherClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetWeatherTool::create_route(weather))
        .with_route(SaveNoteTool::create_route(store.clone()))
        .with_route(GetNotesTool::create_route(store))
}
