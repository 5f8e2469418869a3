use anyhow::{Context, Result};
use palabra_model::BrowserProfile;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::StatusCode;

/// A raw page as returned by the site: status plus body text.
///
/// The status is data, not an error. Whether a non-200 answer is fatal is
/// the caller's call.
#[derive(Debug)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client presenting a browser signature to the dictionary site.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build the client for the given profile. No request is made here;
    /// network I/O happens only in [`Fetcher::fetch`].
    pub fn new(profile: &BrowserProfile) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("es-ES,es;q=0.9,en;q=0.5"),
        );

        let client = reqwest::Client::builder()
            .user_agent(profile.user_agent())
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Perform a single GET. Transport errors propagate; any status code
    /// comes back as data.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch page")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        tracing::debug!(status = %status, bytes = body.len(), "Received response");

        Ok(FetchedPage { status, body })
    }
}
