//! Announcement page fetching
//!
//! Blocking one-shot fetch of the CEK page. The upstream site rejects
//! requests without a browser user agent, hence the fixed header. Timeouts
//! and fallback policy live with the caller; this module only reports what
//! went wrong.

use std::time::Duration;

use thiserror::Error;

/// The announcement page for scheduled disconnections.
pub const DEFAULT_URL: &str = "https://cek.dp.ua/index.php/cpojivaham/vidkliuchennia.html";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Fetch the raw HTML of the announcement page.
pub fn fetch_page(url: &str) -> Result<String, FetchError> {
    let transport = |source: reqwest::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(transport)?;

    let response = client.get(url).send().map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(transport)
}
