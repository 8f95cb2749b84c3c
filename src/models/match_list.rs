//! Match-list payload: the ordered references a player's history is made of.

use serde::{Deserialize, Serialize};

use super::ChampionId;

/// Ordered list of match references, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchList {
    pub matches: Vec<MatchReference>,
}

/// Pointer to a match that can be fetched and analyzed later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReference {
    pub game_id: u64,

    #[serde(default)]
    pub champion: ChampionId,

    #[serde(default)]
    pub queue: u32,

    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
}
