//! HTTP client for the Registry droplet (identity and service directory).

use super::{build_http_client, timed_probe, ClientError, DropletRegistry};
use crate::models::ServiceStatus;
use async_trait::async_trait;
use std::time::Duration;

pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DropletRegistry for RegistryClient {
    async fn check_health(&self) -> Result<ServiceStatus, ClientError> {
        timed_probe(&self.http, "registry", &self.base_url).await
    }

    async fn fetch_droplets(&self) -> Result<Vec<serde_json::Value>, ClientError> {
        let url = format!("{}/droplets", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        let txt = response.text().await?;
        serde_json::from_str::<Vec<serde_json::Value>>(&txt)
            .map_err(|e| ClientError::Payload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_normalized() {
        let client = RegistryClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
