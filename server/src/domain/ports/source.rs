//! Remote feed source port
//!
//! Abstracts retrieving the raw feed document so the import cycle can be
//! exercised without the network.

use async_trait::async_trait;

use crate::error::FetchError;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Download the document at `url` and return its raw body
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
