//! Team aggregation: one keyed pass over the players, then frozen averages.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{PlayerRecord, TeamAggregate, TeamId};

/// Standard roster size for a 5v5 match.
pub const DEFAULT_TEAM_SIZE: usize = 5;

/// Number of teams a match must have.
pub const TEAM_COUNT: usize = 2;

/// A match whose shape the scoring rules do not cover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralAnomaly {
    #[error("Expected 2 teams, found {found}")]
    TeamCount { found: usize },

    #[error("Team {first_team} has {first_size} members but team {second_team} has {second_size}")]
    UnevenRosters {
        first_team: TeamId,
        first_size: usize,
        second_team: TeamId,
        second_size: usize,
    },

    #[error("Team {team_id} has {found} members, expected {expected}")]
    RosterSize {
        team_id: TeamId,
        expected: usize,
        found: usize,
    },

    #[error("Members of team {team_id} disagree on the match outcome")]
    WinFlagMismatch { team_id: TeamId },
}

/// Running totals for one team.
#[derive(Debug, Default)]
struct TeamTotals {
    win: Option<bool>,
    win_conflict: bool,
    members: usize,
    kills: u64,
    assists: u64,
    deaths: u64,
    damage_done: u64,
    damage_taken: u64,
    healed: u64,
}

impl TeamTotals {
    fn add(&mut self, player: &PlayerRecord) {
        match self.win {
            None => self.win = Some(player.win),
            Some(win) if win != player.win => self.win_conflict = true,
            Some(_) => {}
        }

        self.members += 1;
        self.kills += u64::from(player.kills);
        self.assists += u64::from(player.assists);
        self.deaths += u64::from(player.deaths);
        self.damage_done += player.damage_done;
        self.damage_taken += player.damage_taken;
        self.healed += player.healed;
    }

    fn freeze(&self, team_id: TeamId) -> TeamAggregate {
        let members = self.members as f64;

        TeamAggregate {
            team_id,
            win: self.win.unwrap_or(false),
            total_kills: self.kills,
            total_assists: self.assists,
            total_deaths: self.deaths,
            total_damage_done: self.damage_done,
            total_damage_taken: self.damage_taken,
            total_healed: self.healed,
            avg_kp: (self.kills + self.assists) as f64 / members,
            avg_deaths: self.deaths as f64 / members,
            avg_damage_done: self.damage_done as f64 / members,
            avg_damage_taken: self.damage_taken as f64 / members,
            avg_healed: self.healed as f64 / members,
        }
    }
}

/// Accumulates players into per-team totals.
#[derive(Debug)]
pub struct TeamAggregator {
    expected_team_size: usize,
    teams: BTreeMap<TeamId, TeamTotals>,
}

impl TeamAggregator {
    pub fn new(expected_team_size: usize) -> Self {
        Self {
            expected_team_size,
            teams: BTreeMap::new(),
        }
    }

    /// Fold one player into their team's totals.
    pub fn add(&mut self, player: &PlayerRecord) {
        self.teams.entry(player.team_id).or_default().add(player);
    }

    /// Check the match shape and compute averages.
    ///
    /// Averages divide by the observed member count, which after the checks
    /// equals the expected roster size.
    pub fn finish(self) -> Result<BTreeMap<TeamId, TeamAggregate>, StructuralAnomaly> {
        if self.teams.len() != TEAM_COUNT {
            return Err(StructuralAnomaly::TeamCount {
                found: self.teams.len(),
            });
        }

        if let Some((&team_id, _)) = self.teams.iter().find(|(_, t)| t.win_conflict) {
            return Err(StructuralAnomaly::WinFlagMismatch { team_id });
        }

        let sizes: Vec<(TeamId, usize)> = self
            .teams
            .iter()
            .map(|(&id, totals)| (id, totals.members))
            .collect();
        let (first_team, first_size) = sizes[0];
        let (second_team, second_size) = sizes[1];

        if first_size != second_size {
            return Err(StructuralAnomaly::UnevenRosters {
                first_team,
                first_size,
                second_team,
                second_size,
            });
        }

        if first_size != self.expected_team_size {
            return Err(StructuralAnomaly::RosterSize {
                team_id: first_team,
                expected: self.expected_team_size,
                found: first_size,
            });
        }

        Ok(self
            .teams
            .iter()
            .map(|(&id, totals)| (id, totals.freeze(id)))
            .collect())
    }
}

/// Aggregate a full set of players in one pass.
pub fn aggregate_teams(
    players: &[PlayerRecord],
    expected_team_size: usize,
) -> Result<BTreeMap<TeamId, TeamAggregate>, StructuralAnomaly> {
    let mut aggregator = TeamAggregator::new(expected_team_size);
    for player in players {
        aggregator.add(player);
    }
    aggregator.finish()
}
