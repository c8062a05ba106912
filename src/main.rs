/**
 * PARADISE DASHBOARD - Point d'entrée du droplet Dashboard
 *
 * RÔLE : Couche d'agrégation fine au-dessus des droplets Registry et
 * Orchestrator. Bootstrap : config, clients upstream, API REST.
 *
 * ARCHITECTURE : Polling HTTP des upstreams + API REST lecture seule.
 * UTILITÉ : Vue unique de la santé du système Paradise et de son avancement.
 */

mod clients;
mod config;
mod droplets;
mod health;
mod http;
mod models;
mod progress;

use crate::clients::{OrchestratorClient, RegistryClient};
use crate::health::HealthTracker;
use crate::http::AppState;

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Charger les variables d'environnement depuis .env (si présent)
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let cfg = config::load_config().await;
    let timeout = Duration::from_secs(cfg.request_timeout_secs);

    // clients upstream construits explicitement, injectés dans les handlers
    let registry = RegistryClient::new(&cfg.registry.base_url, timeout)
        .context("failed to build registry client")?;
    let orchestrator = OrchestratorClient::new(&cfg.orchestrator.base_url, timeout)
        .context("failed to build orchestrator client")?;

    let tracker = HealthTracker::new();

    let listen_port = cfg.listen_port;
    let app_state = AppState {
        registry: Arc::new(registry),
        orchestrator: Arc::new(orchestrator),
        tracker,
        cfg: Arc::new(cfg),
    };

    // HTTP
    let app = http::build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], listen_port));
    info!("dashboard listening on http://{addr}");
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("http server failed")?;

    Ok(())
}
