//! MCP server exposing US weather tools backed by the National Weather
//! Service and Nominatim geocoding APIs.

pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod models;
pub mod service;
pub mod tools;

pub use config::Config;
pub use service::{tool_document, Weather};
