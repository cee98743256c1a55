use crate::domain::ports::TextSource;
use crate::utils::error::{RenderError, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Content store served over HTTP, paths resolved against `base_url`.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: Client,
    base_url: Url,
}

impl HttpTextSource {
    pub fn new(base_url: Url) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    async fn get_text(&self, path: &str) -> Result<Option<String>> {
        let url = self.base_url.join(path)?;
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| RenderError::TransportError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", url, status);
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| RenderError::TransportError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        Ok(Some(body))
    }
}
