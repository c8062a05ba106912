use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DashboardConfig {
    pub listen_port: u16,
    pub request_timeout_secs: u64,
    pub registry: UpstreamConf,
    pub orchestrator: UpstreamConf,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpstreamConf {
    pub base_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            listen_port: 8002,
            request_timeout_secs: 5,
            registry: UpstreamConf { base_url: "http://localhost:8000".into() },
            orchestrator: UpstreamConf { base_url: "http://localhost:8001".into() },
        }
    }
}

pub async fn load_config() -> DashboardConfig {
    let path = std::env::var("PARADISE_DASHBOARD_CONFIG").unwrap_or_else(|_| "dashboard.yaml".into());
    if Path::new(&path).exists() {
        let txt = fs::read_to_string(&path).await.unwrap_or_default();
        if txt.trim().is_empty() { return DashboardConfig::default(); }
        serde_yaml::from_str(&txt).unwrap_or_else(|e| {
            warn!("config invalide: {e}");
            DashboardConfig::default()
        })
    } else {
        warn!("pas de dashboard.yaml, usage config par défaut");
        DashboardConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.listen_port, 8002);
        assert_eq!(cfg.registry.base_url, "http://localhost:8000");
        assert_eq!(cfg.orchestrator.base_url, "http://localhost:8001");
        assert_eq!(cfg.request_timeout_secs, 5);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
listen_port: 9002
request_timeout_secs: 2
registry:
  base_url: "http://registry.paradise.local:8000"
orchestrator:
  base_url: "http://orchestrator.paradise.local:8001"
"#;
        let cfg: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.listen_port, 9002);
        assert_eq!(cfg.registry.base_url, "http://registry.paradise.local:8000");
    }
}
