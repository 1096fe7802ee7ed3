use tracing::debug;

use crate::config::Config;
use crate::constants::GEOCODER_COUNTRY_CODES;
use crate::error::GeocodeError;
use crate::http::HttpClient;
use crate::models::{GeocodeCandidate, GeocodeResult};

/// Resolves a free-text US place name to coordinates using the best match
pub async fn geocode_city(
    config: &Config,
    city_name: &str,
) -> Result<GeocodeResult, GeocodeError> {
    let http = HttpClient::new()?;
    let url = config.geocoder_url("/search");

    let candidates = http
        .get_json::<Vec<GeocodeCandidate>>(
            &url,
            &[
                ("q", city_name),
                ("format", "json"),
                ("limit", "1"),
                ("countrycodes", GEOCODER_COUNTRY_CODES),
            ],
        )
        .await?;

    let Some(best) = candidates.into_iter().next() else {
        return Err(GeocodeError::NotFound(city_name.to_string()));
    };
    debug!("Geocoded {} to {}", city_name, best.display_name);

    Ok(GeocodeResult::try_from(best)?)
}
