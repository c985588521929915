//! Note listing tool definition.
//!
//! Returns every saved note as pretty-printed JSON, or the literal
//! `No notes found.` when the store is empty.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::notes::NoteStore;

/// Parameters for the note listing tool. The tool takes no arguments; the
/// empty struct still produces the `{"type": "object"}` schema clients
/// expect.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNotesParams {}

/// Note listing tool.
pub struct GetNotesTool;

impl GetNotesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_notes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieve all saved notes from local JSON file";

    /// Execute the tool logic.
    pub fn execute(store: &NoteStore) -> Result<CallToolResult, McpError> {
        let notes = store
            .list()
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        info!("Listing {} note(s)", notes.len());

        if notes.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(
                "No notes found.",
            )]));
        }

        let body = serde_json::to_string_pretty(&notes)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(body)]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetNotesParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let store = store.clone();
            async move { Self::execute(&store) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use std::fs;
    use tempfile::TempDir;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    fn temp_store() -> (TempDir, NoteStore) {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::new(dir.path().join("notes.json"));
        (dir, store)
    }

    #[test]
    fn test_empty_store_reports_no_notes() {
        let (_dir, store) = temp_store();
        let result = GetNotesTool::execute(&store).unwrap();
        assert_eq!(result.content.len(), 1);
        assert_eq!(result_text(&result), "No notes found.");
    }

    #[test]
    fn test_notes_listed_as_json_array() {
        let (_dir, store) = temp_store();
        store.save("first").unwrap();
        store.save("second").unwrap();

        let result = GetNotesTool::execute(&store).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        let notes = parsed.as_array().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0]["text"], "first");
        assert_eq!(notes[1]["id"], 2);
    }

    #[test]
    fn test_corrupt_store_reports_no_notes() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "not json at all").unwrap();

        let result = GetNotesTool::execute(&store).unwrap();
        assert_eq!(result_text(&result), "No notes found.");
    }
}
