use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "WeatherMCPServer/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Nominatim geocoding API base URL
pub const GEOCODER_API_BASE: &str = "https://nominatim.openstreetmap.org";

/// Timeout applied to every outbound request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The NWS only covers US territories, so geocoding is restricted to match.
pub const GEOCODER_COUNTRY_CODES: &str = "us";

/// Number of forecast periods returned by `get_forecast`
pub const FORECAST_PERIOD_LIMIT: usize = 7;

/// Number of hourly periods returned by `get_forecast`
pub const HOURLY_PERIOD_LIMIT: usize = 24;
