//! HTTP clients for the third-party address and map providers.
//!
//! Every call has its own timeout and maps transport, status and empty
//! responses to [`ProviderError`]. Callers log and degrade; nothing here is
//! shown to the end user.

pub mod nominatim;
pub mod overpass;
pub mod smarty;

use std::time::Duration;

/// Identifies this tool to the providers, as Nominatim's usage policy requires.
pub const USER_AGENT: &str = concat!(
    "RE-Property-Lookup/",
    env!("CARGO_PKG_VERSION"),
    " (Commercial Real Estate Insurance Tool)"
);

pub const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);
pub const OVERPASS_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("no match")]
    Empty,
}

/// The shared outbound client. Per-call timeouts are set on each request.
pub fn http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// Reject anything but 200 before decoding the body.
pub(crate) fn ensure_ok(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(ProviderError::Status(status));
    }
    Ok(response)
}
