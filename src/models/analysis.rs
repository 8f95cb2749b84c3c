//! Analysis output handed to persistence and presentation layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChampionId, MatchEntryId, PlayerAnalysis, TeamAggregate, TeamId};

/// Match-level metadata copied from the input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub game_duration: u64,
    pub game_creation: i64,
    pub queue_id: u32,
    pub game_id: u64,
}

impl MatchSummary {
    /// Creation time as a UTC timestamp, if representable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.game_creation)
    }
}

/// Result of analyzing one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub teams: Vec<TeamAggregate>,
    pub players: Vec<PlayerAnalysis>,

    #[serde(rename = "match")]
    pub summary: MatchSummary,
}

impl AnalysisResult {
    /// Analysis entry for the given account.
    pub fn player(&self, account_id: &str) -> Option<&PlayerAnalysis> {
        self.players.iter().find(|p| p.account_id() == account_id)
    }

    /// Aggregate of the team with the given id.
    pub fn team(&self, team_id: TeamId) -> Option<&TeamAggregate> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    /// Whether the given account's team won the match.
    pub fn win_for(&self, account_id: &str) -> Option<bool> {
        let player = self.player(account_id)?;
        self.team(player.team_id()).map(|t| t.win)
    }

    /// Subset of the analysis persisted for one account.
    pub fn player_match_entry(&self, account_id: &str) -> Option<PlayerMatchEntry> {
        let player = self.player(account_id)?;
        let win = self.win_for(account_id)?;
        let record = &player.record;

        Some(PlayerMatchEntry {
            id: MatchEntryId::for_match_entry(self.summary.game_id, account_id),
            game_id: self.summary.game_id,
            account_id: record.account_id.clone(),
            champion_id: record.champion_id,
            game_creation: self.summary.game_creation,
            lp_gain: player.lp_gain,
            win,
            kills: record.kills,
            deaths: record.deaths,
            assists: record.assists,
            damage_done: record.damage_done,
            damage_taken: record.damage_taken,
            healed: record.healed,
            double_kills: record.double_kills,
            triple_kills: record.triple_kills,
            quadra_kills: record.quadra_kills,
            penta_kills: record.penta_kills,
            gold_earned: record.gold_earned,
            gold_spent: record.gold_spent,
            total_minions_killed: record.total_minions_killed,
            first_blood_kill: record.first_blood_kill,
            longest_time_spent_living: record.longest_time_spent_living,
        })
    }
}

/// One (match, account) row: the LP delta plus the counters that feed
/// lifetime player statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchEntry {
    pub id: MatchEntryId,
    pub game_id: u64,
    pub account_id: String,
    pub champion_id: ChampionId,
    pub game_creation: i64,
    pub lp_gain: f64,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
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
