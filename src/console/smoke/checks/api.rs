//! JSON POST checks against the ML and backend tiers.
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Upper bound for the response-body excerpt quoted in error messages.
pub const BODY_SNIPPET_LIMIT: usize = 200;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build an HTTP client: {err:?}")]
    ClientBuilding { err: Arc<reqwest::Error> },
    #[error("No response from the service: {err}")]
    Response { err: Arc<reqwest::Error> },
    #[error("{code}\nResponse: {body}")]
    UnsuccessfulResponse { code: StatusCode, body: String },
    #[error("Service returned a body that is not JSON: {err}")]
    InvalidJson { err: Arc<reqwest::Error> },
}

/// POSTs the payload and decodes the JSON response.
///
/// # Errors
///
/// Any transport failure, non-200 status (body quoted truncated to
/// [`BODY_SNIPPET_LIMIT`] characters) or undecodable body becomes an
/// [`Error`]; nothing panics.
pub async fn post_json(url: &Url, payload: &Value, timeout: Duration) -> Result<Value, Error> {
    tracing::debug!("POST {url}");

    let client = HttpClient::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::ClientBuilding { err: e.into() })?;

    let response = client
        .post(url.clone())
        .json(payload)
        .send()
        .await
        .map_err(|e| Error::Response { err: e.into() })?;

    let code = response.status();

    if code == StatusCode::OK {
        response.json().await.map_err(|e| Error::InvalidJson { err: e.into() })
    } else {
        let body = response.text().await.unwrap_or_default();

        Err(Error::UnsuccessfulResponse {
            code,
            body: truncate(&body, BODY_SNIPPET_LIMIT),
        })
    }
}

fn truncate(body: &str, limit: usize) -> String {
    body.chars().take(limit).collect()
}
