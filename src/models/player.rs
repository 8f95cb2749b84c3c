//! Per-player derived records.

use serde::{Deserialize, Serialize};

use super::{ChampionId, TeamId};

/// Flattened view of one participant after the identity join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub account_id: String,
    pub summoner_name: String,
    pub champion_id: ChampionId,

    /// Resolved display name, or the catalog's unknown sentinel
    pub champion: String,

    pub team_id: TeamId,

    /// Carried for team aggregation only; the team entry reports the outcome.
    #[serde(skip)]
    pub win: bool,

    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,

    /// Kill participation (kills + assists)
    #[serde(rename = "KP")]
    pub kp: u64,

    pub damage_done: u64,
    pub damage_taken: u64,
    pub healed: u64,

    pub double_kills: u32,
    pub triple_kills: u32,
    pub quadra_kills: u32,
    pub penta_kills: u32,

    pub gold_earned: u32,
    pub gold_spent: u32,
    pub total_minions_killed: u32,
    pub first_blood_kill: bool,
    pub longest_time_spent_living: u32,
}

/// A player's deviation from the team average on each tracked metric.
///
/// Each value is `(player - average) / average`, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RelativePerformance {
    #[serde(rename = "teamComparedKP")]
    pub kp: f64,

    #[serde(rename = "teamComparedDeaths")]
    pub deaths: f64,

    #[serde(rename = "teamComparedDamageDone")]
    pub damage_done: f64,

    #[serde(rename = "teamComparedDamageTaken")]
    pub damage_taken: f64,

    #[serde(rename = "teamComparedHealed")]
    pub healed: f64,
}

/// Clamped, weighted gain components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GainBreakdown {
    #[serde(rename = "KPGain")]
    pub kp: f64,

    #[serde(rename = "deathsGain")]
    pub deaths: f64,

    #[serde(rename = "damageDoneGain")]
    pub damage_done: f64,

    #[serde(rename = "damageTakenGain")]
    pub damage_taken: f64,

    #[serde(rename = "healedGain")]
    pub healed: f64,
}

impl GainBreakdown {
    /// Highest of the three combat components. Only one of them is credited.
    pub fn best_combat_gain(&self) -> f64 {
        self.damage_done.max(self.damage_taken).max(self.healed)
    }
}

/// Complete per-player analysis, serialized as one flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAnalysis {
    #[serde(flatten)]
    pub record: PlayerRecord,

    #[serde(flatten)]
    pub relative: RelativePerformance,

    #[serde(flatten)]
    pub gains: GainBreakdown,

    #[serde(rename = "lpGain")]
    pub lp_gain: f64,
}

impl PlayerAnalysis {
    pub fn account_id(&self) -> &str {
        &self.record.account_id
    }

    pub fn team_id(&self) -> TeamId {
        self.record.team_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_combat_gain_picks_highest() {
        let gains = GainBreakdown {
            kp: 4.0,
            deaths: -1.0,
            damage_done: 2.0,
            damage_taken: -1.0,
            healed: 3.0,
        };
        assert_eq!(gains.best_combat_gain(), 3.0);
    }

    #[test]
    fn test_best_combat_gain_all_negative() {
        let gains = GainBreakdown {
            damage_done: -4.0,
            damage_taken: -2.5,
            healed: -3.0,
            ..Default::default()
        };
        assert_eq!(gains.best_combat_gain(), -2.5);
    }

    #[test]
    fn test_relative_performance_field_names() {
        let relative = RelativePerformance {
            kp: 0.5,
            ..Default::default()
        };
        let json = serde_json::to_value(relative).unwrap();

        assert_eq!(json["teamComparedKP"], 0.5);
        assert_eq!(json["teamComparedDeaths"], 0.0);
        assert!(json.get("kp").is_none());
    }
}
