//! Team-level aggregates.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// Frozen totals and per-member averages for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAggregate {
    pub team_id: TeamId,
    pub win: bool,

    pub total_kills: u64,
    pub total_assists: u64,
    pub total_deaths: u64,
    pub total_damage_done: u64,
    pub total_damage_taken: u64,
    pub total_healed: u64,

    /// Average kill participation per member
    #[serde(rename = "avgKP")]
    pub avg_kp: f64,
    pub avg_deaths: f64,
    pub avg_damage_done: f64,
    pub avg_damage_taken: f64,
    pub avg_healed: f64,
}
