//! Match analysis pipeline: raw match record to scored analysis.

use tracing::{debug, warn};

use crate::calculate::{
    aggregate_teams, lp_gain, relative_performance, score_gains, DEFAULT_TEAM_SIZE,
};
use crate::catalog::ChampionCatalog;
use crate::models::{
    AnalysisResult, MatchRecord, MatchSummary, PlayerAnalysis, PlayerRecord, TeamAggregate,
};

use super::extract::{extract_player, IdentityIndex};
use super::AnalysisError;

/// Analyzes match records against a shared champion catalog.
///
/// Holds no per-match state, so one analyzer can serve any number of
/// matches, including from several threads.
#[derive(Debug, Clone, Copy)]
pub struct MatchAnalyzer<'a> {
    catalog: &'a ChampionCatalog,
    expected_team_size: usize,
}

impl<'a> MatchAnalyzer<'a> {
    pub fn new(catalog: &'a ChampionCatalog) -> Self {
        Self {
            catalog,
            expected_team_size: DEFAULT_TEAM_SIZE,
        }
    }

    /// Builder method to set the roster size each team must have.
    pub fn with_team_size(mut self, expected_team_size: usize) -> Self {
        self.expected_team_size = expected_team_size;
        self
    }

    /// Analyze one match. Fails without a partial result if any participant
    /// cannot be identified or the match is not two equal, full teams.
    pub fn analyze(&self, record: &MatchRecord) -> Result<AnalysisResult, AnalysisError> {
        let identities = IdentityIndex::new(&record.participant_identities);

        let players = record
            .participants
            .iter()
            .map(|participant| extract_player(participant, &identities, self.catalog))
            .collect::<Result<Vec<_>, _>>()?;

        let teams = aggregate_teams(&players, self.expected_team_size).map_err(|anomaly| {
            warn!("Skipping match {}: {}", record.game_id, anomaly);
            anomaly
        })?;

        // Every player's team is present: the aggregates were built from them.
        let players: Vec<PlayerAnalysis> = players
            .into_iter()
            .map(|player| {
                let team = &teams[&player.team_id];
                score_player(player, team)
            })
            .collect();

        debug!(
            "Analyzed match {} ({} players, {} teams)",
            record.game_id,
            players.len(),
            teams.len()
        );

        Ok(AnalysisResult {
            teams: teams.into_values().collect(),
            players,
            summary: MatchSummary {
                game_duration: record.game_duration,
                game_creation: record.game_creation,
                queue_id: record.queue_id,
                game_id: record.game_id,
            },
        })
    }
}

/// Score one player against their team's aggregate.
pub fn score_player(record: PlayerRecord, team: &TeamAggregate) -> PlayerAnalysis {
    let relative = relative_performance(&record, team);
    let gains = score_gains(&relative);
    let lp_gain = lp_gain(team.win, &gains);

    PlayerAnalysis {
        record,
        relative,
        gains,
        lp_gain,
    }
}

/// Analyze one match with the standard 5v5 roster size.
pub fn analyze_match(
    record: &MatchRecord,
    catalog: &ChampionCatalog,
) -> Result<AnalysisResult, AnalysisError> {
    MatchAnalyzer::new(catalog).analyze(record)
}
