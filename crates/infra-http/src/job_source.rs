// HTTP JobSource Implementation

use crate::HttpConfig;
use async_trait::async_trait;
use fieldsync_core::domain::Job;
use fieldsync_core::error::{AppError, Result};
use fieldsync_core::port::JobSource;
use reqwest::{Client, Url};
use tracing::debug;

// Helper to convert reqwest::Error to AppError
fn map_reqwest_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::Transport(format!("Failed to read response body: {}", err))
    } else if err.is_connect() {
        AppError::Transport(format!("Connection failed: {}", err))
    } else if err.is_timeout() {
        AppError::Transport(format!("Request timed out: {}", err))
    } else {
        AppError::Transport(err.to_string())
    }
}

/// `JobSource` backed by the REST API
///
/// One attempt per call, no retries, and no timeout beyond the client's
/// defaults.
#[derive(Clone)]
pub struct HttpJobSource {
    client: Client,
    config: HttpConfig,
}

impl HttpJobSource {
    pub fn new(config: HttpConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_collection(&self) -> Result<serde_json::Value> {
        let url = self.config.collection_url()?;
        self.get_json(url).await
    }

    async fn fetch_record(&self, id: &str) -> Result<Job> {
        let url = self.config.record_url(id)?;
        self.get_json(url).await
    }
}
