//! Feed endpoint HTTP client.

use reqwest::{header, Client, Response};
use url::Url;

use crate::api::types::MediaPage;
use crate::error::{Error, Result};

/// Default feed host.
pub const DEFAULT_BASE_URL: &str = "https://instagram.com";

/// Browser user agent sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36";

/// HTTP client for the per-user media feed and the image host.
pub struct InstagramApi {
    client: Client,
    base_url: Url,
}

impl InstagramApi {
    /// Create a new API client against the given feed host.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Build the media endpoint URL for a user, optionally qualified with a cursor.
    fn media_url(&self, username: &str, max_id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.join(&format!("{}/media/", username))?;

        if let Some(max_id) = max_id {
            url.query_pairs_mut().append_pair("max_id", max_id);
        }

        Ok(url)
    }

    /// Fetch one page of a user's media feed.
    ///
    /// Any failure here — transport, unparsable body, or a status other
    /// than "ok" — is a `Remote` error carrying the request URL.
    pub async fn get_media_page(&self, username: &str, max_id: Option<&str>) -> Result<MediaPage> {
        let url = self.media_url(username, max_id)?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Remote {
                url: url.to_string(),
                message: format!("request failed: {}", e),
            })?;

        let text = response.text().await.map_err(|e| Error::Remote {
            url: url.to_string(),
            message: format!("failed to read body: {}", e),
        })?;

        let page: MediaPage = serde_json::from_str(&text).map_err(|e| Error::Remote {
            url: url.to_string(),
            message: format!(
                "unparsable body: {} - Response: {}",
                e,
                &text[..text.len().min(500)]
            ),
        })?;

        if page.status != "ok" {
            return Err(Error::Remote {
                url: url.to_string(),
                message: format!("status '{}'", page.status),
            });
        }

        Ok(page)
    }

    /// Download a file from a URL.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
