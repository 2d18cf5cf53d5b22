//! Remote text fetching over HTTP.
//!
//! One GET per call via reqwest, no retries. The response body is returned
//! as-is; no HTML parsing or readability extraction is attempted, since the
//! summarisation model copes with markup well enough.

use thiserror::Error;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("briefit/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to fetch URL: {0}")]
    Request(#[from] reqwest::Error),
}

/// Fetch the body of a URL as text.
///
/// Client/server error statuses fail; redirects follow the client default.
/// No timeout is set, so a stalled server blocks until the underlying
/// library gives up.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;

    Ok(body)
}
