//! Raw match payload as returned by the match-data provider.
//!
//! Field names follow the provider's camelCase JSON so a payload can be
//! deserialized without any intermediate mapping.

use serde::{Deserialize, Serialize};

/// Team identifier (100 = blue side, 200 = red side).
pub type TeamId = u32;

/// Participant slot within one match (1..=10 for a 5v5 game).
pub type ParticipantId = u32;

/// Numeric champion identifier.
pub type ChampionId = u32;

/// A complete match record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub game_id: u64,

    /// Creation time in milliseconds since the Unix epoch
    pub game_creation: i64,

    /// Game length in seconds
    pub game_duration: u64,

    pub queue_id: u32,

    pub participants: Vec<Participant>,

    pub participant_identities: Vec<ParticipantIdentity>,
}

/// Per-participant stat block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub participant_id: ParticipantId,
    pub champion_id: ChampionId,
    pub team_id: TeamId,
    pub stats: ParticipantStats,
}

/// Raw end-of-game counters for one participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_damage_dealt_to_champions: u64,
    pub total_damage_taken: u64,
    pub total_heal: u64,
    pub double_kills: u32,
    pub triple_kills: u32,
    pub quadra_kills: u32,
    pub penta_kills: u32,
    pub gold_earned: u32,
    pub gold_spent: u32,
    pub total_minions_killed: u32,
    pub first_blood_kill: bool,
    pub longest_time_spent_living: u32,
    pub win: bool,
}

/// Links a participant slot to an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentity {
    pub participant_id: ParticipantId,
    pub player: PlayerIdentity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdentity {
    pub account_id: String,
    pub summoner_name: String,
}
