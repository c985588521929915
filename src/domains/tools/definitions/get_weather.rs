//! Weather lookup tool definition.
//!
//! Resolves a city name through the Open-Meteo geocoding API and returns
//! the current weather at the first match as pretty-printed JSON.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::domains::weather::{WeatherClient, WeatherLookup};

/// Parameters for the weather lookup tool.
///
/// Used for schema generation; the handler reads the raw argument map so a
/// missing city yields the tool's own error text instead of a protocol
/// fault.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// Name of the city to get weather for.
    #[schemars(description = "Name of the city to get weather for")]
    pub city: String,
}

/// Weather lookup tool.
pub struct GetWeatherTool;

impl GetWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get current weather for a city using Open-Meteo API";

    /// Execute the tool logic.
    ///
    /// A city that does not resolve is serialized as
    /// `{"error": "City not found"}` inside a successful response; only
    /// transport failures become protocol-level errors.
    pub async fn execute(
        client: &WeatherClient,
        args: &JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let Some(city) = args
            .get("city")
            .and_then(|v| v.as_str())
            .filter(|c| !c.is_empty())
        else {
            return Ok(CallToolResult::success(vec![Content::text(
                "Error: city parameter is required",
            )]));
        };

        info!("Weather tool called for city: {}", city);

        let payload = match client
            .lookup(city)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?
        {
            WeatherLookup::Current(current) => current,
            WeatherLookup::CityNotFound => json!({"error": "City not found"}),
        };

        let text = serde_json::to_string_pretty(&payload)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetWeatherParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(client: Arc<WeatherClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move { Self::execute(&client, &args).await }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WeatherConfig;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    fn test_client() -> WeatherClient {
        WeatherClient::new(WeatherConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_city_is_payload_error() {
        let client = test_client();
        let args = JsonObject::new();
        let result = tokio_test::block_on(GetWeatherTool::execute(&client, &args)).unwrap();
        assert_eq!(result.content.len(), 1);
        assert_eq!(result_text(&result), "Error: city parameter is required");
    }

    #[test]
    fn test_empty_city_is_payload_error() {
        let client = test_client();
        let mut args = JsonObject::new();
        args.insert("city".to_string(), json!(""));
        let result = tokio_test::block_on(GetWeatherTool::execute(&client, &args)).unwrap();
        assert_eq!(result_text(&result), "Error: city parameter is required");
    }

    #[test]
    fn test_schema_requires_city() {
        let tool = GetWeatherTool::to_tool();
        let required = tool
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .expect("schema has a required array");
        assert!(required.iter().any(|v| v == "city"));
    }

    // Live-API test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_unresolvable_city_serialized_as_error_json() {
        let client = test_client();
        let mut args = JsonObject::new();
        args.insert("city".to_string(), json!("XYZ123InvalidCity"));
        let result = GetWeatherTool::execute(&client, &args).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(parsed["error"], "City not found");
    }
}
