use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String, // online, offline, degraded
    pub response_time_ms: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DropletInfo {
    pub droplet_id: String,
    pub name: String,
    pub status: String, // active, inactive, unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SystemStatus {
    pub overall_health: String, // healthy, degraded, critical
    pub services: Vec<ServiceStatus>,
    pub droplet_count: usize,
    pub last_updated: String, // RFC3339 UTC
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SimpleSystemStatus {
    pub services: Vec<ServiceStatus>,
    pub total: usize,
    pub online: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParadiseProgress {
    pub total_droplets: u32,
    pub built_droplets: u32,
    pub progress_percent: u32,
    pub gap_count: u32,
    pub phase_2_total: u32,
    pub phase_2_built: u32,
    pub phase_2_remaining: u32,
    pub velocity: String,
    pub days_remaining: u32,
    pub coherence_score: u32,
}
