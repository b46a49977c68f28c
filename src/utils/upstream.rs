use std::time::Duration;

use async_trait::async_trait;
use serde_json::{from_str, Value};
use tracing::debug;

use crate::models::error::UpstreamError;
use crate::utils::config::Config;

/// Upstream API seam. Handlers only see this trait, so tests can count or
/// fail calls without a network.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, UpstreamError>;
    async fn probe(&self) -> bool;
}

/// Real client against the Ergast-compatible API.
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
    request_timeout: Duration,
    health_timeout: Duration,
}

impl HttpUpstream {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.ergast_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            health_timeout: Duration::from_secs(config.health_timeout_secs),
        }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get_json(&self, path: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {url}");
        let res = self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }
        let body = res.text().await?;
        Ok(from_str(&body)?)
    }

    async fn probe(&self) -> bool {
        let url = format!("{}/seasons.json?limit=1", self.base_url);
        match self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
        {
            Ok(res) => res.status().is_success(),
            Err(_) => false,
        }
    }
}
