/**
 * CLIENTS UPSTREAM - Accès aux droplets Registry et Orchestrator
 *
 * RÔLE :
 * Ce module définit l'interface commune vers les collaborateurs externes.
 * Le dashboard ne possède aucune donnée : tout vient de ces deux services.
 *
 * FONCTIONNEMENT :
 * - HealthProbe = sonde de santé (GET /health chronométré côté client)
 * - DropletRegistry = sonde + annuaire des droplets (GET /droplets)
 * - Implémentations HTTP dans registry.rs / orchestrator.rs (reqwest)
 * - Les clients sont construits depuis la config et injectés dans AppState,
 *   les tests substituent des fakes via ces traits
 */

pub mod orchestrator;
pub mod registry;

use crate::models::ServiceStatus;
use async_trait::async_trait;
use std::time::{Duration, Instant};

pub use orchestrator::OrchestratorClient;
pub use registry::RegistryClient;

/// Erreurs possibles lors d'un appel à un droplet upstream
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid payload: {0}")]
    Payload(String),
}

/// Sonde de santé d'un droplet (Orchestrator, et Registry via DropletRegistry)
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check_health(&self) -> Result<ServiceStatus, ClientError>;
}

/// Registry = sonde de santé + annuaire des droplets déclarés
#[async_trait]
pub trait DropletRegistry: Send + Sync {
    async fn check_health(&self) -> Result<ServiceStatus, ClientError>;

    /// Enregistrements bruts tels que publiés par le Registry (tableau JSON)
    async fn fetch_droplets(&self) -> Result<Vec<serde_json::Value>, ClientError>;
}

pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// GET /health chronométré. Un upstream joignable mais en erreur HTTP est
/// "degraded", un 2xx est "online" ; l'injoignable remonte en ClientError.
pub(crate) async fn timed_probe(
    http: &reqwest::Client,
    name: &str,
    base_url: &str,
) -> Result<ServiceStatus, ClientError> {
    let url = format!("{}/health", base_url.trim_end_matches('/'));
    let started = Instant::now();
    let response = http.get(&url).send().await?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    let status = if response.status().is_success() { "online" } else { "degraded" };
    Ok(ServiceStatus {
        name: name.to_string(),
        status: status.to_string(),
        response_time_ms: elapsed_ms,
    })
}
