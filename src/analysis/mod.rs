//! Match analysis.
//!
//! - **extract**: participant + identity join into flat player records
//! - **pipeline**: extraction, team aggregation and scoring for one match
//! - **window**: trailing selection over a player's match list

pub mod extract;
pub mod pipeline;
pub mod window;

pub use extract::{extract_player, IdentityIndex, LookupError};
pub use pipeline::{analyze_match, score_player, MatchAnalyzer};
pub use window::trailing_window;

use thiserror::Error;

use crate::calculate::StructuralAnomaly;

/// Reasons a match cannot be analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Identity lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Structural anomaly: {0}")]
    Structure(#[from] StructuralAnomaly),
}
