use crate::domain::ports::ColorSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_COLORS_URL: &str =
    "https://raw.githubusercontent.com/github/linguist/master/lib/linguist/languages.yml";

/// Fetches the linguist languages document over HTTP.
#[derive(Debug, Clone)]
pub struct LinguistColors {
    client: Client,
    url: String,
}

impl LinguistColors {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl Default for LinguistColors {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS_URL)
    }
}

#[async_trait]
impl ColorSource for LinguistColors {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("fetching color source: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;

        response.text().await.map_err(unavailable)
    }
}

fn unavailable(err: reqwest::Error) -> CatalogError {
    CatalogError::ColorSourceUnavailable {
        reason: err.to_string(),
    }
}
