/**
 * AGRÉGATION SANTÉ - Vue d'ensemble des droplets Paradise
 *
 * RÔLE :
 * Ce module interroge Registry et Orchestrator et combine leurs statuts
 * en une classification globale healthy / degraded / critical.
 *
 * FONCTIONNEMENT :
 * - Les deux sondes partent en parallèle (tokio::join!), aucune dépendance
 * - Un upstream injoignable devient "offline" avec temps de réponse
 *   sentinelle, la requête n'échoue jamais (réponse best-effort en 200)
 * - HealthTracker suit l'uptime du dashboard lui-même et compte les
 *   sondages servis et les échecs upstream
 */

use crate::clients::{DropletRegistry, HealthProbe};
use crate::config::DashboardConfig;
use crate::droplets;
use crate::models::{ServiceStatus, SimpleSystemStatus, SystemStatus};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

/// Temps de réponse sentinelle quand l'upstream n'a pas répondu
pub const OFFLINE_RESPONSE_TIME_MS: f64 = 0.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardHealth {
    pub uptime_seconds: u64,
    pub status_polls: u64,
    pub droplet_fetches: u64,
    pub upstream_failures: u64,
    pub last_poll: Option<String>,
    pub registry_url: String,
    pub orchestrator_url: String,
}

#[derive(Clone)]
pub struct HealthTracker {
    start_time: Instant,
    status_polls: Arc<AtomicU64>,
    droplet_fetches: Arc<AtomicU64>,
    upstream_failures: Arc<AtomicU64>,
    last_poll: Arc<parking_lot::Mutex<Option<String>>>,
}

impl HealthTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            status_polls: Arc::new(AtomicU64::new(0)),
            droplet_fetches: Arc::new(AtomicU64::new(0)),
            upstream_failures: Arc::new(AtomicU64::new(0)),
            last_poll: Arc::new(parking_lot::Mutex::new(None)),
        }
    }

    pub fn record_status_poll(&self) {
        self.status_polls.fetch_add(1, Ordering::Relaxed);
        *self.last_poll.lock() = Some(now_rfc3339());
    }

    pub fn record_droplet_fetch(&self) {
        self.droplet_fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_failure(&self) {
        self.upstream_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn upstream_failures(&self) -> u64 {
        self.upstream_failures.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self, cfg: &DashboardConfig) -> DashboardHealth {
        DashboardHealth {
            uptime_seconds: self.start_time.elapsed().as_secs(),
            status_polls: self.status_polls.load(Ordering::Relaxed),
            droplet_fetches: self.droplet_fetches.load(Ordering::Relaxed),
            upstream_failures: self.upstream_failures.load(Ordering::Relaxed),
            last_poll: self.last_poll.lock().clone(),
            registry_url: cfg.registry.base_url.clone(),
            orchestrator_url: cfg.orchestrator.base_url.clone(),
        }
    }
}

pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// healthy si tous les services sont online, critical si aucun, sinon degraded
pub fn classify_overall(services: &[ServiceStatus]) -> &'static str {
    let online_count = services.iter().filter(|s| s.status == "online").count();
    if online_count == services.len() {
        "healthy"
    } else if online_count > 0 {
        "degraded"
    } else {
        "critical"
    }
}

/// Convertit l'échec d'une sonde en statut offline au lieu de propager l'erreur
fn status_or_offline(
    name: &str,
    result: Result<ServiceStatus, crate::clients::ClientError>,
    tracker: &HealthTracker,
) -> ServiceStatus {
    match result {
        Ok(status) => status,
        Err(e) => {
            warn!("{name} unreachable: {e}");
            tracker.record_upstream_failure();
            ServiceStatus {
                name: name.to_string(),
                status: "offline".to_string(),
                response_time_ms: OFFLINE_RESPONSE_TIME_MS,
            }
        }
    }
}

/// Statut système agrégé : santé des deux droplets + nombre de droplets connus
pub async fn collect_system_status(
    registry: &dyn DropletRegistry,
    orchestrator: &dyn HealthProbe,
    tracker: &HealthTracker,
) -> SystemStatus {
    tracker.record_status_poll();

    let (registry_health, orchestrator_health) =
        tokio::join!(registry.check_health(), orchestrator.check_health());

    let services = vec![
        status_or_offline("registry", registry_health, tracker),
        status_or_offline("orchestrator", orchestrator_health, tracker),
    ];

    let overall_health = classify_overall(&services).to_string();
    let droplet_count = droplets::droplet_count(registry, tracker).await;

    SystemStatus {
        overall_health,
        services,
        droplet_count,
        last_updated: now_rfc3339(),
    }
}

/// Variante plate du statut : liste des services + compteur online
pub async fn collect_simple_status(
    registry: &dyn DropletRegistry,
    orchestrator: &dyn HealthProbe,
    tracker: &HealthTracker,
) -> SimpleSystemStatus {
    tracker.record_status_poll();

    let (registry_health, orchestrator_health) =
        tokio::join!(registry.check_health(), orchestrator.check_health());

    let services = vec![
        status_or_offline("registry", registry_health, tracker),
        status_or_offline("orchestrator", orchestrator_health, tracker),
    ];

    let online = services.iter().filter(|s| s.status == "online").count();

    SimpleSystemStatus {
        total: services.len(),
        online,
        services,
    }
}
