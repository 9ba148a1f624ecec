//! Club list fetch over HTTP.

use std::time::Duration;
use thiserror::Error;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors that can occur while fetching the club list.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Client construction or transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Endpoint answered with a non-success status.
    #[error("club list endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Fetches the raw club list body.
///
/// The timeout bounds the whole request; an unresponsive endpoint fails the
/// run instead of hanging it.
pub fn fetch_club_list(url: &str, timeout_secs: u64) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.text()?)
}
