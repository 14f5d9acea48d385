//! reqwest implementation of the FeedSource port

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::FeedSource;
use crate::error::FetchError;

/// Downloads feed documents with a shared reqwest client
pub struct HttpFeedSource {
    http: Client,
}

impl HttpFeedSource {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

impl Default for HttpFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(%url, "Fetching remote feed");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
