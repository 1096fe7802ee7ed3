use clap::Parser;

use crate::constants::{GEOCODER_API_BASE, NWS_API_BASE};

/// Runtime configuration for the upstream APIs
#[derive(Debug, Clone, Parser)]
#[command(name = "nws-forecast-mcp", version)]
#[command(about = "MCP server exposing US weather forecasts from the National Weather Service")]
pub struct Config {
    /// Base URL of the National Weather Service API
    #[arg(long, env = "NWS_API_BASE", default_value = NWS_API_BASE)]
    pub nws_base_url: String,

    /// Base URL of the Nominatim geocoding API
    #[arg(long, env = "GEOCODER_API_BASE", default_value = GEOCODER_API_BASE)]
    pub geocoder_base_url: String,
}

impl Config {
    pub fn new(nws_base_url: impl Into<String>, geocoder_base_url: impl Into<String>) -> Self {
        Self {
            nws_base_url: nws_base_url.into(),
            geocoder_base_url: geocoder_base_url.into(),
        }
    }

    /// Joins `path` onto the NWS base URL
    pub fn nws_url(&self, path: &str) -> String {
        join(&self.nws_base_url, path)
    }

    /// Joins `path` onto the geocoder base URL
    pub fn geocoder_url(&self, path: &str) -> String {
        join(&self.geocoder_base_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(NWS_API_BASE, GEOCODER_API_BASE)
    }
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
