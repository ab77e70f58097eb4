//! Frontend reachability check (plain GET against the backend root).
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build an HTTP client: {err:?}")]
    ClientBuilding { err: Arc<reqwest::Error> },
    #[error("No response from the service: {err}")]
    Response { err: Arc<reqwest::Error> },
    #[error("{code}")]
    UnsuccessfulResponse { code: StatusCode },
}

/// # Errors
///
/// Any transport failure or non-200 status becomes an [`Error`].
pub async fn get_root(url: &Url, timeout: Duration) -> Result<StatusCode, Error> {
    tracing::debug!("GET {url}");

    let client = HttpClient::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::ClientBuilding { err: e.into() })?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| Error::Response { err: e.into() })?;

    let code = response.status();

    if code == StatusCode::OK {
        Ok(code)
    } else {
        Err(Error::UnsuccessfulResponse { code })
    }
}
