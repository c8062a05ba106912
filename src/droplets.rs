use crate::clients::DropletRegistry;
use crate::health::HealthTracker;
use crate::models::DropletInfo;
use tracing::warn;

/// Au minimum Registry + Orchestrator, même si l'annuaire ne répond pas
pub const DROPLET_COUNT_FLOOR: usize = 2;

/// Transforme un enregistrement brut du Registry en DropletInfo.
/// Les champs manquants prennent des valeurs par défaut, port et
/// description restent absents.
pub fn map_droplet_record(raw: &serde_json::Value) -> DropletInfo {
    DropletInfo {
        droplet_id: raw
            .get("droplet_id")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string(),
        name: raw
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown")
            .to_string(),
        status: raw
            .get("status")
            .and_then(|v| v.as_str())
            .unwrap_or("inactive")
            .to_string(),
        port: raw
            .get("port")
            .and_then(|v| v.as_u64())
            .and_then(|p| u16::try_from(p).ok()),
        description: raw
            .get("description")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        capabilities: raw
            .get("capabilities")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Catalogue statique des droplets connus, utilisé quand le Registry
/// ne renvoie rien (démarrage à froid, annuaire vide)
pub fn fallback_droplets() -> Vec<DropletInfo> {
    vec![
        DropletInfo {
            droplet_id: "registry".into(),
            name: "Registry".into(),
            status: "active".into(),
            port: Some(8000),
            description: Some("Identity and SSOT management".into()),
            capabilities: vec!["identity".into(), "jwt".into(), "service-directory".into()],
        },
        DropletInfo {
            droplet_id: "orchestrator".into(),
            name: "Orchestrator".into(),
            status: "active".into(),
            port: Some(8001),
            description: Some("Task routing and messaging".into()),
            capabilities: vec![
                "routing".into(),
                "messaging".into(),
                "heartbeat-collection".into(),
            ],
        },
        DropletInfo {
            droplet_id: "dashboard".into(),
            name: "Dashboard".into(),
            status: "active".into(),
            port: Some(8002),
            description: Some("Public marketing site and system visualization".into()),
            capabilities: vec![
                "web-interface".into(),
                "system-visualization".into(),
                "marketing-site".into(),
            ],
        },
    ]
}

/// Liste les droplets déclarés auprès du Registry.
/// Un Registry injoignable est traité comme un annuaire vide : réponse
/// best-effort, jamais d'erreur HTTP côté dashboard.
pub async fn list_droplets(registry: &dyn DropletRegistry, tracker: &HealthTracker) -> Vec<DropletInfo> {
    tracker.record_droplet_fetch();

    let records = match registry.fetch_droplets().await {
        Ok(records) => records,
        Err(e) => {
            warn!("registry droplet fetch failed: {e}");
            tracker.record_upstream_failure();
            Vec::new()
        }
    };

    let droplets: Vec<DropletInfo> = records.iter().map(map_droplet_record).collect();
    if droplets.is_empty() {
        fallback_droplets()
    } else {
        droplets
    }
}

/// Nombre de droplets vus par le Registry, avec plancher quand l'annuaire
/// est vide ou injoignable
pub async fn droplet_count(registry: &dyn DropletRegistry, tracker: &HealthTracker) -> usize {
    tracker.record_droplet_fetch();

    match registry.fetch_droplets().await {
        Ok(records) if !records.is_empty() => records.len(),
        Ok(_) => DROPLET_COUNT_FLOOR,
        Err(e) => {
            warn!("registry droplet count failed: {e}");
            tracker.record_upstream_failure();
            DROPLET_COUNT_FLOOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ClientError, DropletRegistry};
    use crate::models::ServiceStatus;
    use async_trait::async_trait;
    use serde_json::json;

    struct FakeRegistry {
        droplets: Option<Vec<serde_json::Value>>, // None = injoignable
    }

    #[async_trait]
    impl DropletRegistry for FakeRegistry {
        async fn check_health(&self) -> Result<ServiceStatus, ClientError> {
            Ok(ServiceStatus {
                name: "registry".into(),
                status: "online".into(),
                response_time_ms: 1.0,
            })
        }

        async fn fetch_droplets(&self) -> Result<Vec<serde_json::Value>, ClientError> {
            match &self.droplets {
                Some(d) => Ok(d.clone()),
                None => Err(ClientError::Payload("connection refused".into())),
            }
        }
    }

    #[test]
    fn test_map_full_record() {
        let raw = json!({
            "droplet_id": "notes",
            "name": "Notes",
            "status": "active",
            "port": 8003,
            "description": "Distributed notes",
            "capabilities": ["crud", "sync"]
        });
        let d = map_droplet_record(&raw);
        assert_eq!(d.droplet_id, "notes");
        assert_eq!(d.name, "Notes");
        assert_eq!(d.status, "active");
        assert_eq!(d.port, Some(8003));
        assert_eq!(d.description.as_deref(), Some("Distributed notes"));
        assert_eq!(d.capabilities, vec!["crud", "sync"]);
    }

    #[test]
    fn test_map_record_defaults() {
        let d = map_droplet_record(&json!({ "name": "Mystery" }));
        assert_eq!(d.droplet_id, "unknown");
        assert_eq!(d.status, "inactive");
        assert_eq!(d.port, None);
        assert_eq!(d.description, None);
        assert!(d.capabilities.is_empty());
    }

    #[test]
    fn test_fallback_catalog() {
        let fallback = fallback_droplets();
        assert_eq!(fallback.len(), 3);

        let ids: Vec<&str> = fallback.iter().map(|d| d.droplet_id.as_str()).collect();
        assert_eq!(ids, vec!["registry", "orchestrator", "dashboard"]);

        let ports: Vec<u16> = fallback.iter().filter_map(|d| d.port).collect();
        assert_eq!(ports, vec![8000, 8001, 8002]);
    }

    #[tokio::test]
    async fn test_list_empty_registry_uses_fallback() {
        let registry = FakeRegistry { droplets: Some(vec![]) };
        let tracker = HealthTracker::new();

        let droplets = list_droplets(&registry, &tracker).await;
        assert_eq!(droplets.len(), 3);
        assert_eq!(droplets[0].droplet_id, "registry");
    }

    #[tokio::test]
    async fn test_list_unreachable_registry_uses_fallback() {
        let registry = FakeRegistry { droplets: None };
        let tracker = HealthTracker::new();

        let droplets = list_droplets(&registry, &tracker).await;
        assert_eq!(droplets.len(), 3);
    }

    #[tokio::test]
    async fn test_list_live_registry() {
        let registry = FakeRegistry {
            droplets: Some(vec![json!({"droplet_id": "notes", "status": "active"})]),
        };
        let tracker = HealthTracker::new();

        let droplets = list_droplets(&registry, &tracker).await;
        assert_eq!(droplets.len(), 1);
        assert_eq!(droplets[0].droplet_id, "notes");
    }

    #[tokio::test]
    async fn test_droplet_count_floor() {
        let tracker = HealthTracker::new();

        let empty = FakeRegistry { droplets: Some(vec![]) };
        assert_eq!(droplet_count(&empty, &tracker).await, DROPLET_COUNT_FLOOR);

        let down = FakeRegistry { droplets: None };
        assert_eq!(droplet_count(&down, &tracker).await, DROPLET_COUNT_FLOOR);

        let live = FakeRegistry {
            droplets: Some(vec![json!({}), json!({}), json!({}), json!({}), json!({})]),
        };
        assert_eq!(droplet_count(&live, &tracker).await, 5);
    }
}
