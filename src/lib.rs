//! # Match Analyzer
//!
//! Scores a single ARAM match: per-team aggregates, each player's
//! performance relative to their team, and a bounded LP delta per player.
//!
//! ## Architecture
//!
//! - **models**: Match payload, derived records and analysis output
//! - **catalog**: Champion id to name lookup
//! - **calculate**: Team aggregation, relative deviation and gain scoring
//! - **analysis**: Participant extraction, the analysis pipeline and match-list windowing
//! - **config**: Configuration loading and validation

pub mod analysis;
pub mod calculate;
pub mod catalog;
pub mod config;
pub mod models;

pub use analysis::{analyze_match, trailing_window, AnalysisError, MatchAnalyzer};
pub use catalog::{ChampionCatalog, UNKNOWN_CHAMPION};
pub use models::*;
