use crate::config::Config;
use crate::error::AlertsError;
use crate::http::{FetchError, HttpClient};
use crate::models::{AlertDetail, AlertResponse, AlertsReport};

/// Lists active alerts at a point in the long alert form
pub async fn get_alerts(
    config: &Config,
    latitude: f64,
    longitude: f64,
) -> Result<AlertsReport, AlertsError> {
    let http = HttpClient::new()?;
    let response = fetch_active_alerts(&http, config, latitude, longitude).await?;

    let alerts: Vec<AlertDetail> = response
        .features
        .into_iter()
        .map(|feature| AlertDetail::from(feature.properties))
        .collect();

    Ok(AlertsReport {
        count: alerts.len(),
        alerts,
    })
}

/// Requests `/alerts/active?point=lat,lon` on the given client
pub(crate) async fn fetch_active_alerts(
    http: &HttpClient,
    config: &Config,
    latitude: f64,
    longitude: f64,
) -> Result<AlertResponse, FetchError> {
    let url = config.nws_url("/alerts/active");
    let point = format!("{},{}", latitude, longitude);

    http.get_json(&url, &[("point", point.as_str())]).await
}
