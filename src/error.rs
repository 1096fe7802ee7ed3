//! Per-tool error types.
//!
//! Each tool formats its own message; the `Display` output of these enums is
//! exactly the string placed in the `{"error": ...}` document.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::http::FetchError;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Geocoding failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Geocoding failed: invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ParseFloatError),
}

#[derive(Debug, Error)]
pub enum ForecastError {
    /// The grid-point lookup answered 404
    #[error("Location not covered by National Weather Service. This API only supports US territories.")]
    NotCovered,

    /// Transport failure or a non-2xx status
    #[error("API error: {0}")]
    Api(FetchError),

    /// A referenced field is absent or a required sequence is empty
    #[error("Unexpected API response format: {0}")]
    Format(String),
}

impl From<FetchError> for ForecastError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Decode(e) => ForecastError::Format(e.to_string()),
            other => ForecastError::Api(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum AlertsError {
    #[error("Failed to fetch alerts: {0}")]
    Fetch(#[from] FetchError),
}
