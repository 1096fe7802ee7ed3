//! Outbound HTTP adapter shared by every tool.
//!
//! A fresh [`HttpClient`] is built per tool invocation and dropped when the
//! invocation returns, so no connection state outlives a single call.

use reqwest::{redirect, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::constants::{REQUEST_TIMEOUT, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure or timeout
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Any status outside 2xx, redirects included
    #[error("Request failed with status: {status} for url ({url})")]
    Status { status: StatusCode, url: String },

    /// The body was not the JSON shape we asked for
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Builds a client carrying the fixed user agent and request timeout.
    /// Redirects are returned to the caller rather than followed.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }

    /// Issues a GET and returns the raw response without checking its status
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, FetchError> {
        debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        Ok(request.send().await?)
    }

    /// Issues a GET, rejects non-2xx statuses, and deserializes the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let response = self.get(url, query).await?;
        decode(response).await
    }
}

/// Rejects non-2xx statuses and deserializes the JSON body of `response`
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: response.url().to_string(),
        });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
