//! Champion id to display-name lookup.
//!
//! Built once from the static Data Dragon `champion.json` dataset and then
//! shared read-only. Callers construct it explicitly and pass it into the
//! analyzer.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::ChampionId;

/// Name returned for ids missing from the dataset.
pub const UNKNOWN_CHAMPION: &str = "Not found";

/// Errors that can occur while loading the champion dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read champion data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse champion data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Champion {id} has non-numeric key {key:?}")]
    InvalidKey { id: String, key: String },
}

#[derive(Debug, Deserialize)]
struct ChampionDataset {
    data: HashMap<String, ChampionEntry>,
}

#[derive(Debug, Deserialize)]
struct ChampionEntry {
    id: String,
    key: String,
}

/// Read-only champion lookup table.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    names: HashMap<ChampionId, String>,
}

impl ChampionCatalog {
    /// Build a catalog from Data Dragon JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let dataset: ChampionDataset = serde_json::from_str(json)?;

        let mut names = HashMap::with_capacity(dataset.data.len());
        for entry in dataset.data.into_values() {
            let id: ChampionId = entry.key.trim().parse().map_err(|_| CatalogError::InvalidKey {
                id: entry.id.clone(),
                key: entry.key.clone(),
            })?;
            names.insert(id, entry.id);
        }

        info!("Loaded {} champions", names.len());
        Ok(Self { names })
    }

    /// Build a catalog from a Data Dragon JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Display name for `id`, or [`UNKNOWN_CHAMPION`].
    pub fn lookup(&self, id: ChampionId) -> &str {
        self.names
            .get(&id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CHAMPION)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(ChampionId, S)> for ChampionCatalog {
    fn from_iter<I: IntoIterator<Item = (ChampionId, S)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(id, name)| (id, name.into()))
                .collect(),
        }
    }
}
