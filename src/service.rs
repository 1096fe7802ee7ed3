use std::fmt::Display;
use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::models::{CoordinatesRequest, ErrorDocument, GeocodeCityRequest};
use crate::tools::{alerts, forecast, geocode};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }
}

/// Renders a tool outcome as its output document, `{"error": ...}` on failure
pub fn tool_document<T, E>(outcome: Result<T, E>) -> serde_json::Result<Value>
where
    T: Serialize,
    E: Display,
{
    match outcome {
        Ok(document) => serde_json::to_value(document),
        Err(e) => serde_json::to_value(ErrorDocument {
            error: e.to_string(),
        }),
    }
}

/// Wraps a tool outcome into a successful call result; errors travel inside the document
fn respond<T, E>(tool: &str, outcome: Result<T, E>) -> Result<CallToolResult, McpError>
where
    T: Serialize,
    E: Display,
{
    if let Err(e) = &outcome {
        tracing::warn!("{} returned an error: {}", tool, e);
    }

    let document = tool_document(outcome).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize {} result: {}", tool, e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::json(document)?]))
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nws-forecast-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "US weather forecasts and alerts from the National Weather Service. \
                Use geocode_city to turn a place name into coordinates, then get_forecast \
                or get_alerts. Locations outside US territories are not covered."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Converts a city name to coordinates
    #[tool(description = "Convert a US city name to geographic coordinates. Provide a city name such as 'San Francisco, CA' or 'Portland, Oregon'. Returns lat, lon and display_name.")]
    async fn geocode_city(
        &self,
        Parameters(request): Parameters<GeocodeCityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Geocoding city: {}", request.city_name);

        let outcome = geocode::geocode_city(&self.config, &request.city_name).await;
        respond("geocode_city", outcome)
    }

    /// Gets the combined forecast report for a US location
    #[tool(description = "Get the weather forecast for US coordinates. Returns location info, current conditions, the next 7 forecast periods, the next 24 hourly periods and active weather alerts from the National Weather Service.")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let outcome =
            forecast::get_forecast(&self.config, request.latitude, request.longitude).await;
        respond("get_forecast", outcome)
    }

    /// Gets active weather alerts for a US location
    #[tool(description = "Get active weather alerts for US coordinates. Returns the alert count and each alert's event, headline, description, severity, urgency, onset and expiry.")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting alerts for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let outcome = alerts::get_alerts(&self.config, request.latitude, request.longitude).await;
        respond("get_alerts", outcome)
    }
}
