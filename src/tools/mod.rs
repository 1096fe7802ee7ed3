//! The three tools exposed over MCP.
//!
//! Each tool owns its HTTP client for the duration of one call and never
//! shares state with other invocations.

pub mod alerts;
pub mod forecast;
pub mod geocode;
