use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Nominatim API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodeCandidate {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProperties {
    pub forecast: String,
    pub forecast_hourly: String,
    pub relative_location: RelativeLocation,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocationProperties {
    pub city: Value,
    pub state: Value,
}

/// Periods are kept as raw JSON so every upstream field survives truncation.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
pub struct AlertProperties {
    pub event: Value,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub severity: Value,
    pub urgency: Value,
    pub onset: Option<String>,
    pub expires: Option<String>,
}

// ============================================================================
// Tool Output Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

impl TryFrom<GeocodeCandidate> for GeocodeResult {
    type Error = std::num::ParseFloatError;

    fn try_from(candidate: GeocodeCandidate) -> Result<Self, Self::Error> {
        Ok(Self {
            lat: candidate.lat.trim().parse()?,
            lon: candidate.lon.trim().parse()?,
            display_name: candidate.display_name,
        })
    }
}

/// Per-location resource URLs resolved from a grid-point lookup
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    pub forecast_url: String,
    pub hourly_forecast_url: String,
    pub city: Value,
    pub state: Value,
}

impl From<PointsResponse> for GridPoint {
    fn from(points: PointsResponse) -> Self {
        let props = points.properties;
        let place = props.relative_location.properties;
        Self {
            forecast_url: props.forecast,
            hourly_forecast_url: props.forecast_hourly,
            city: place.city,
            state: place.state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: PeriodSet,
    pub hourly: PeriodSet,
    pub alerts: Vec<AlertSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub city: Value,
    pub state: Value,
}

/// Projection of the first forecast period.
///
/// Values pass through untouched, `null` included; only an absent key is rejected.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: Value,
    pub temperature_unit: Value,
    pub wind_speed: Value,
    pub wind_direction: Value,
    pub short_forecast: Value,
    pub detailed_forecast: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSet {
    pub periods: Vec<Value>,
}

/// Short alert form embedded in forecast output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertSummary {
    pub event: Value,
    pub headline: Option<String>,
    pub severity: Value,
    pub urgency: Value,
}

impl From<AlertProperties> for AlertSummary {
    fn from(props: AlertProperties) -> Self {
        Self {
            event: props.event,
            headline: props.headline,
            severity: props.severity,
            urgency: props.urgency,
        }
    }
}

/// Long alert form returned by `get_alerts`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertDetail {
    pub event: Value,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub severity: Value,
    pub urgency: Value,
    pub onset: Option<String>,
    pub expires: Option<String>,
}

impl From<AlertProperties> for AlertDetail {
    fn from(props: AlertProperties) -> Self {
        Self {
            event: props.event,
            headline: props.headline,
            description: props.description,
            severity: props.severity,
            urgency: props.urgency,
            onset: props.onset,
            expires: props.expires,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertsReport {
    pub count: usize,
    pub alerts: Vec<AlertDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDocument {
    pub error: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GeocodeCityRequest {
    /// City name, e.g. "San Francisco, CA" or "Portland, Oregon"
    pub city_name: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CoordinatesRequest {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}
