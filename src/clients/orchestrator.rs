//! HTTP client for the Orchestrator droplet (task routing and heartbeats).

use super::{build_http_client, timed_probe, ClientError, HealthProbe};
use crate::models::ServiceStatus;
use async_trait::async_trait;
use std::time::Duration;

pub struct OrchestratorClient {
    http: reqwest::Client,
    base_url: String,
}

impl OrchestratorClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl HealthProbe for OrchestratorClient {
    async fn check_health(&self) -> Result<ServiceStatus, ClientError> {
        timed_probe(&self.http, "orchestrator", &self.base_url).await
    }
}
