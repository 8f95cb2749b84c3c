//! Participant extraction: raw stat block + identity join into a PlayerRecord.

use std::collections::HashMap;

use thiserror::Error;

use crate::catalog::ChampionCatalog;
use crate::models::{Participant, ParticipantId, ParticipantIdentity, PlayerIdentity, PlayerRecord};

/// Identity resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No identity found for participant {participant_id}")]
    MissingIdentity { participant_id: ParticipantId },

    #[error("Participant {participant_id} has more than one identity")]
    DuplicateIdentity { participant_id: ParticipantId },
}

/// Participant id to identity, built once per match.
#[derive(Debug)]
pub struct IdentityIndex<'a> {
    by_participant: HashMap<ParticipantId, (&'a PlayerIdentity, usize)>,
}

impl<'a> IdentityIndex<'a> {
    pub fn new(identities: &'a [ParticipantIdentity]) -> Self {
        let mut by_participant: HashMap<ParticipantId, (&'a PlayerIdentity, usize)> =
            HashMap::with_capacity(identities.len());
        for identity in identities {
            by_participant
                .entry(identity.participant_id)
                .and_modify(|entry| entry.1 += 1)
                .or_insert((&identity.player, 1));
        }
        Self { by_participant }
    }

    /// The single identity registered for `participant_id`.
    pub fn resolve(&self, participant_id: ParticipantId) -> Result<&'a PlayerIdentity, LookupError> {
        match self.by_participant.get(&participant_id) {
            None => Err(LookupError::MissingIdentity { participant_id }),
            Some(&(_, count)) if count > 1 => {
                Err(LookupError::DuplicateIdentity { participant_id })
            }
            Some(&(identity, _)) => Ok(identity),
        }
    }
}

/// Build the flat record for one participant.
pub fn extract_player(
    participant: &Participant,
    identities: &IdentityIndex<'_>,
    catalog: &ChampionCatalog,
) -> Result<PlayerRecord, LookupError> {
    let identity = identities.resolve(participant.participant_id)?;
    let stats = &participant.stats;

    Ok(PlayerRecord {
        account_id: identity.account_id.clone(),
        summoner_name: identity.summoner_name.clone(),
        champion_id: participant.champion_id,
        champion: catalog.lookup(participant.champion_id).to_string(),
        team_id: participant.team_id,
        win: stats.win,
        kills: stats.kills,
        deaths: stats.deaths,
        assists: stats.assists,
        kp: u64::from(stats.kills) + u64::from(stats.assists),
        damage_done: stats.total_damage_dealt_to_champions,
        damage_taken: stats.total_damage_taken,
        healed: stats.total_heal,
        double_kills: stats.double_kills,
        triple_kills: stats.triple_kills,
        quadra_kills: stats.quadra_kills,
        penta_kills: stats.penta_kills,
        gold_earned: stats.gold_earned,
        gold_spent: stats.gold_spent,
        total_minions_killed: stats.total_minions_killed,
        first_blood_kill: stats.first_blood_kill,
        longest_time_spent_living: stats.longest_time_spent_living,
    })
}
