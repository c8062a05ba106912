/**
 * API REST DASHBOARD - Surface HTTP du droplet Dashboard
 *
 * RÔLE :
 * Ce module expose les endpoints de lecture agrégeant l'état du système
 * Paradise. Interface entre frontend de visualisation et droplets backend.
 *
 * FONCTIONNEMENT :
 * - Serveur Axum, routes lecture seule sous /api, réponses JSON
 * - Aucun état mutable partagé entre requêtes : chaque handler interroge
 *   les upstreams et reconstruit sa réponse
 * - Tout répond en 200 best-effort, un upstream en panne apparaît
 *   "offline" dans la réponse au lieu de faire échouer la requête
 *
 * SÉCURITÉ :
 * - Surface publique en lecture seule, pas d'authentification
 */

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::clients::{DropletRegistry, HealthProbe};
use crate::config::DashboardConfig;
use crate::health::{self, DashboardHealth, HealthTracker};
use crate::models::{DropletInfo, ParadiseProgress, SimpleSystemStatus, SystemStatus};
use crate::{droplets, progress};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn DropletRegistry>,
    pub orchestrator: Arc<dyn HealthProbe>,
    pub tracker: HealthTracker,
    pub cfg: Arc<DashboardConfig>,
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/system/status", get(get_system_status))
        .route("/api/droplets", get(get_droplets))
        .route("/api/paradise-progress", get(get_paradise_progress))
        .route("/api/system-status", get(get_system_status_simple))
        .route("/api/dashboard/health", get(get_dashboard_health))
        .with_state(app_state)
}

// GET /api/system/status (vue agrégée)
async fn get_system_status(State(app): State<AppState>) -> Json<SystemStatus> {
    let status = health::collect_system_status(
        app.registry.as_ref(),
        app.orchestrator.as_ref(),
        &app.tracker,
    )
    .await;
    Json(status)
}

// GET /api/droplets (annuaire, avec fallback statique)
async fn get_droplets(State(app): State<AppState>) -> Json<Vec<DropletInfo>> {
    let droplets = droplets::list_droplets(app.registry.as_ref(), &app.tracker).await;
    Json(droplets)
}

// GET /api/paradise-progress (constantes du chantier)
async fn get_paradise_progress() -> Json<ParadiseProgress> {
    Json(progress::paradise_progress())
}

// GET /api/system-status (forme plate)
async fn get_system_status_simple(State(app): State<AppState>) -> Json<SimpleSystemStatus> {
    let status = health::collect_simple_status(
        app.registry.as_ref(),
        app.orchestrator.as_ref(),
        &app.tracker,
    )
    .await;
    Json(status)
}

// GET /api/dashboard/health (état du dashboard lui-même)
async fn get_dashboard_health(State(app): State<AppState>) -> Json<DashboardHealth> {
    Json(app.tracker.snapshot(&app.cfg))
}
