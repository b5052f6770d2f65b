//! Source Fetcher - retrieves the raw color sheet

use crate::error::{BuildError, Result};
use async_trait::async_trait;
use tracing::info;

/// Anything that can hand back the raw text behind a source location.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain unauthenticated HTTP GET.
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BuildError::Fetch(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status.as_u16() >= 300 {
            return Err(BuildError::Fetch(format!(
                "{} returned status {}",
                url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BuildError::Fetch(format!("Failed to read body from {}: {}", url, e)))?;

        info!("Fetched {} bytes", body.len());
        Ok(body)
    }
}

/// Serves fixed text; used when the sheet is already on hand.
#[derive(Clone, Debug)]
pub struct StaticFetcher {
    body: String,
}

impl StaticFetcher {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl SourceFetcher for StaticFetcher {
    async fn fetch(&self, _url: &str) -> Result<String> {
        Ok(self.body.clone())
    }
}
