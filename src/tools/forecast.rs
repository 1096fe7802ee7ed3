//! Forecast aggregation.
//!
//! Four dependent requests run in order: grid point, forecast, hourly
//! forecast, active alerts. The first failure aborts the whole call, so a
//! caller either gets a complete report or a single error.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::Config;
use crate::constants::{FORECAST_PERIOD_LIMIT, HOURLY_PERIOD_LIMIT};
use crate::error::ForecastError;
use crate::http::{decode, HttpClient};
use crate::models::{
    AlertResponse, AlertSummary, CurrentConditions, ForecastReport, ForecastResponse, GridPoint,
    Location, PeriodSet, PointsResponse,
};
use crate::tools::alerts::fetch_active_alerts;

/// Builds the combined forecast report for a coordinate pair
pub async fn get_forecast(
    config: &Config,
    latitude: f64,
    longitude: f64,
) -> Result<ForecastReport, ForecastError> {
    let http = HttpClient::new()?;

    let grid = resolve_grid_point(&http, config, latitude, longitude).await?;
    let forecast = http
        .get_json::<ForecastResponse>(&grid.forecast_url, &[])
        .await?;
    let hourly = http
        .get_json::<ForecastResponse>(&grid.hourly_forecast_url, &[])
        .await?;
    let alerts = fetch_active_alerts(&http, config, latitude, longitude).await?;

    compose(latitude, longitude, grid, forecast, hourly, alerts)
}

/// Translates coordinates into forecast URLs and a place name
pub async fn resolve_grid_point(
    http: &HttpClient,
    config: &Config,
    latitude: f64,
    longitude: f64,
) -> Result<GridPoint, ForecastError> {
    let url = config.nws_url(&format!("/points/{},{}", latitude, longitude));
    let response = http.get(&url, &[]).await?;

    // 404 means the point is outside NWS coverage; checked before the generic status path.
    if response.status() == StatusCode::NOT_FOUND {
        return Err(ForecastError::NotCovered);
    }

    let points = decode::<PointsResponse>(response).await?;
    Ok(GridPoint::from(points))
}

fn compose(
    latitude: f64,
    longitude: f64,
    grid: GridPoint,
    forecast: ForecastResponse,
    hourly: ForecastResponse,
    alerts: AlertResponse,
) -> Result<ForecastReport, ForecastError> {
    let mut periods = forecast.properties.periods;
    let first = periods
        .first()
        .ok_or_else(|| ForecastError::Format("forecast contains no periods".to_string()))?;
    let current =
        CurrentConditions::deserialize(first).map_err(|e| ForecastError::Format(e.to_string()))?;
    periods.truncate(FORECAST_PERIOD_LIMIT);

    let mut hourly_periods = hourly.properties.periods;
    hourly_periods.truncate(HOURLY_PERIOD_LIMIT);

    Ok(ForecastReport {
        location: Location {
            lat: latitude,
            lon: longitude,
            city: grid.city,
            state: grid.state,
        },
        current,
        forecast: PeriodSet { periods },
        hourly: PeriodSet {
            periods: hourly_periods,
        },
        alerts: alerts
            .features
            .into_iter()
            .map(|feature| AlertSummary::from(feature.properties))
            .collect(),
    })
}
