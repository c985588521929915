//! Note save tool definition.
//!
//! Appends a note to the JSON-file store and echoes the stored record back
//! as pretty-printed JSON.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::notes::NoteStore;

/// Parameters for the note save tool.
///
/// Used for schema generation; the handler reads the raw argument map so a
/// missing text yields the tool's own error text instead of a protocol
/// fault.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveNoteParams {
    /// The note text to save.
    #[schemars(description = "The note text to save")]
    pub text: String,
}

/// Note save tool.
pub struct SaveNoteTool;

impl SaveNoteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "save_note";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Save a note to local JSON file";

    /// Execute the tool logic.
    ///
    /// Storage failures (permissions, unwritable directory) propagate as
    /// protocol-level errors; everything else is a successful text block.
    pub fn execute(store: &NoteStore, args: &JsonObject) -> Result<CallToolResult, McpError> {
        let Some(text) = args
            .get("text")
            .and_then(|v| v.as_str())
            .filter(|t| !t.is_empty())
        else {
            return Ok(CallToolResult::success(vec![Content::text(
                "Error: text parameter is required",
            )]));
        };

        info!("Saving note ({} chars)", text.len());

        let note = store
            .save(text)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let body = serde_json::to_string_pretty(&note)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(body)]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SaveNoteParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(store: Arc<NoteStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move { Self::execute(&store, &args) }.boxed()
        })
    }
}
