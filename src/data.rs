use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Data structure representing a supported games source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SupportedPlatforms {
    Steam,
}
impl Display for SupportedPlatforms {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SupportedPlatforms::Steam => "Steam",
            }
        )
    }
}

/// Data structure which defines all relevant data about any particular installed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub path: String,
    pub platform: SupportedPlatforms,
    pub cover: Option<String>,
}

/// Snapshot of machine utilization, recomputed for every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthSample {
    pub cpu: f64,
    pub ram: f64,
    pub gpu: f64,
    pub ram_used_gb: f64,
    pub ram_total_gb: f64,
}

/// Result of asking the OS to launch a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LaunchOutcome {
    Launching { game_id: String },
    Error { message: String },
}
